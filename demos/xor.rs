use sigmoid_net::{Network, NetworkConfig, Preset, TrainingSet};

fn main() {
    let set = TrainingSet::from_preset(Preset::Xor);
    let mut network = Network::seeded(NetworkConfig::new(2, 3, 1, 0.5), 7).expect("valid configuration");

    let epochs = 20_000;

    for epoch in 0..epochs {
        for example in &set {
            network.train(&example.input, &example.target).expect("XOR rows fit a 2-3-1 network");
        }
        if epoch % 2_000 == 0 {
            let mse = sigmoid_net::train::mean_squared_error(&network, &set).expect("XOR rows fit a 2-3-1 network");
            println!("Epoch {epoch}: mse = {mse:.6}");
        }
    }

    for example in &set {
        let output = network.predict(&example.input).expect("XOR rows fit a 2-3-1 network");
        println!("Input: {:?} -> Output: {:.4}", example.input, output[0]);
    }
}
