use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::DatasetError;
use crate::network::network::Network;
use crate::train::dataset::{TrainingExample, TrainingSet};
use crate::train::report::{mean_squared_error, TrainReport};
use crate::train::train_config::{Sampling, TrainConfig};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs `config.iterations` online training steps on `network`, then predicts
/// every example of `set` and returns the resulting report.
///
/// # Arguments
/// - `network`: modified in place, one example per step
/// - `set`: examples to draw from; must match the network's widths
/// - `config`: iteration count, sampling mode, progress logging
/// - `rng`: drives `Sampling::Random`; untouched for `Sampling::Cycle`
///
/// # Errors
/// - `DatasetError::Empty` if `set` has no examples
/// - `DatasetError::Network` if the set's widths do not fit the network
///
/// Both are checked before the first step, so on error the network is
/// unchanged.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    set: &TrainingSet,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainReport, DatasetError> {
    if set.is_empty() {
        return Err(DatasetError::Empty);
    }
    set.fits(network.config())?;

    if !network.config().has_conventional_learning_rate() {
        warn!(
            learning_rate = network.learning_rate(),
            "learning rate outside the usual 0.1..=0.99 range"
        );
    }

    info!(
        iterations = config.iterations,
        sampling = %config.sampling,
        examples = set.len(),
        hidden_nodes = network.config().hidden_nodes,
        learning_rate = network.learning_rate(),
        "training started"
    );

    let log_every = config.log_every.filter(|&every| every > 0);
    let t_start = Instant::now();

    for iteration in 0..config.iterations {
        let example = pick_example(set, config.sampling, iteration, rng);
        network.train(&example.input, &example.target)?;

        if let Some(every) = log_every {
            if (iteration + 1) % every == 0 {
                let mse = mean_squared_error(network, set)?;
                debug!(iteration = iteration + 1, mse, "training progress");
            }
        }
    }

    let elapsed_ms = whole_millis(t_start.elapsed());
    let report = TrainReport::evaluate(network, set, config.iterations, elapsed_ms)?;

    info!(
        mse = report.mean_squared_error,
        elapsed_ms,
        "training finished"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Saturates at `u64::MAX` instead of wrapping.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn pick_example<'a, R: Rng + ?Sized>(
    set: &'a TrainingSet,
    sampling: Sampling,
    iteration: usize,
    rng: &mut R,
) -> &'a TrainingExample {
    let index = match sampling {
        Sampling::Random => rng.gen_range(0..set.len()),
        Sampling::Cycle => iteration % set.len(),
    };
    &set.examples()[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::config::NetworkConfig;
    use crate::train::preset::Preset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_set_is_rejected_without_touching_the_network() {
        let mut net = Network::seeded(NetworkConfig::default(), 1).unwrap();
        let before = net.clone();
        let result = train_loop(
            &mut net,
            &TrainingSet::new(2, 1),
            &TrainConfig::new(10, Sampling::Cycle),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(DatasetError::Empty)));
        assert_eq!(net, before);
    }

    #[test]
    fn mismatched_set_is_rejected_before_training() {
        let mut net = Network::seeded(NetworkConfig::new(3, 3, 1, 0.5), 1).unwrap();
        let before = net.clone();
        let result = train_loop(
            &mut net,
            &TrainingSet::from_preset(Preset::Or),
            &TrainConfig::new(10, Sampling::Cycle),
            &mut StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(DatasetError::Network(_))));
        assert_eq!(net, before);
    }

    #[test]
    fn mis_sized_rows_are_caught_before_any_step() {
        let json = r#"{"input_nodes": 2, "output_nodes": 1, "examples": [
            {"input": [0, 0], "target": [0]},
            {"input": [1, 1], "target": [1]},
            {"input": [1], "target": [1]}
        ]}"#;
        let mut net = Network::seeded(NetworkConfig::default(), 1).unwrap();
        let before = net.clone();

        let result = serde_json::from_str::<TrainingSet>(json)
            .map_err(|e| e.to_string())
            .and_then(|set| {
                train_loop(&mut net, &set, &TrainConfig::new(10, Sampling::Cycle), &mut StdRng::seed_from_u64(0))
                    .map_err(|e| e.to_string())
            });

        assert!(result.is_err());
        assert_eq!(net, before);
    }

    #[test]
    fn elapsed_millis_saturate() {
        assert_eq!(whole_millis(Duration::from_millis(1234)), 1234);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn cycle_sampling_matches_manual_loop() {
        let set = TrainingSet::from_preset(Preset::Xor);
        let mut looped = Network::seeded(NetworkConfig::default(), 8).unwrap();
        let mut manual = looped.clone();

        train_loop(
            &mut looped,
            &set,
            &TrainConfig::new(10, Sampling::Cycle),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        for i in 0..10 {
            let example = &set.examples()[i % 4];
            manual.train(&example.input, &example.target).unwrap();
        }

        assert_eq!(looped, manual);
    }

    #[test]
    fn random_sampling_is_reproducible_with_a_seed() {
        let set = TrainingSet::from_preset(Preset::Nand);
        let config = TrainConfig::new(500, Sampling::Random).with_log_every(100);

        let mut a = Network::seeded(NetworkConfig::default(), 3).unwrap();
        let mut b = a.clone();
        let report_a = train_loop(&mut a, &set, &config, &mut StdRng::seed_from_u64(21)).unwrap();
        let report_b = train_loop(&mut b, &set, &config, &mut StdRng::seed_from_u64(21)).unwrap();

        assert_eq!(a, b);
        assert_eq!(report_a.rows, report_b.rows);
        assert_eq!(report_a.iterations, 500);
    }

    #[test]
    fn zero_iterations_only_reports() {
        let set = TrainingSet::from_preset(Preset::And);
        let mut net = Network::seeded(NetworkConfig::default(), 4).unwrap();
        let before = net.clone();
        let report = train_loop(
            &mut net,
            &set,
            &TrainConfig::new(0, Sampling::Random).with_log_every(0),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        assert_eq!(net, before);
        assert_eq!(report.rows.len(), 4);
    }
}
