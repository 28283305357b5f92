use rand::rngs::StdRng;
use rand::SeedableRng;

use sigmoid_net::{
    train_loop, DatasetError, Network, NetworkConfig, NetworkError, Preset, RunConfig, Sampling, TrainConfig,
    TrainingExample, TrainingSet,
};

#[test]
fn random_sampling_run_reduces_error() {
    let set = TrainingSet::from_preset(Preset::Or);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::new(NetworkConfig::new(2, 3, 1, 0.5), &mut rng).unwrap();

    let untrained = train_loop(&mut network.clone(), &set, &TrainConfig::new(0, Sampling::Random), &mut rng).unwrap();
    let trained = train_loop(&mut network, &set, &TrainConfig::new(40_000, Sampling::Random), &mut rng).unwrap();

    assert!(
        trained.mean_squared_error < untrained.mean_squared_error,
        "{} !< {}",
        trained.mean_squared_error,
        untrained.mean_squared_error
    );
    assert_eq!(trained.rows.len(), 4);
    assert_eq!(trained.iterations, 40_000);
}

#[test]
fn hand_built_set_trains_a_wider_network() {
    // Three inputs, two outputs: copy the first input and negate the last.
    let mut set = TrainingSet::new(3, 2);
    for bits in 0..8u8 {
        let input: Vec<f64> = (0..3).map(|i| f64::from((bits >> i) & 1)).collect();
        let target = vec![input[0], 1.0 - input[2]];
        set.add(TrainingExample::new(input, target)).unwrap();
    }
    assert_eq!(set.len(), 8);

    let run = RunConfig {
        hidden_nodes: Some(4),
        learning_rate: Some(0.5),
        iterations: Some(5_000),
        sampling: Some(Sampling::Cycle),
        ..Default::default()
    };
    let mut network = Network::seeded(run.network_config(&set), 5).unwrap();
    let report = train_loop(&mut network, &set, &run.train_config(), &mut StdRng::seed_from_u64(0)).unwrap();

    assert!(report.rows.iter().all(|row| row.prediction.len() == 2));
}

#[test]
fn removing_examples_changes_what_is_reported() {
    let mut set = TrainingSet::from_preset(Preset::Xor);
    set.remove(0).unwrap();
    set.remove(0).unwrap();

    let mut network = Network::seeded(NetworkConfig::default(), 9).unwrap();
    let report = train_loop(&mut network, &set, &TrainConfig::new(100, Sampling::Cycle), &mut StdRng::seed_from_u64(0)).unwrap();

    let inputs: Vec<Vec<f64>> = report.rows.into_iter().map(|row| row.input).collect();
    assert_eq!(inputs, vec![vec![1.0, 0.0], vec![1.0, 1.0]]);
}

#[test]
fn predictions_fail_cleanly_on_mismatched_input() {
    let network = Network::seeded(NetworkConfig::default(), 1).unwrap();
    assert!(matches!(
        network.predict(&[1.0]),
        Err(NetworkError::DimensionMismatch { expected: 2, actual: 1, .. })
    ));

    let mut set = TrainingSet::from_preset(Preset::And);
    assert!(matches!(
        set.add(TrainingExample::new(vec![1.0, 1.0, 1.0], vec![1.0])),
        Err(DatasetError::Network(NetworkError::DimensionMismatch { .. }))
    ));
}
