use deep_miner::{Dataset, Hyper, Perceptron};

fn truth_table() -> Dataset {
    (
        vec![vec![0., 0.], vec![0., 1.], vec![1., 0.], vec![1., 1.]],
        vec![vec![0.], vec![1.], vec![1.], vec![0.]],
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (x, y) = truth_table();
    let hyper = Hyper {
        epochs: 2000,
        ..Hyper::new()
    };

    let mut nn = Perceptron::seeded(&["bit1", "bit2"], 2, &["out"], 42)?;
    let final_loss = {
        let mut trainer = nn.get_trainer();
        trainer.override_hyper(hyper).train(&x, &y)?;
        trainer.losses().last().copied().unwrap_or_default()
    };

    println!("Final epoch error: {}", final_loss);
    for sample in x.iter() {
        println!("{:?} -> {:?}", sample, nn.predict(sample)?);
    }

    Ok(())
}
