use std::io::Write;

use BinomialStatistics::{
    distributions::Binomial::Binomial, errors::DistributionError, plot::TextChart,
};

fn main() -> Result<(), DistributionError> {
    let coin: Binomial = Binomial::parameters().p(0.4).n(25).call()?;
    println!("{}", coin);

    // Simulate some trials, write them to a data file and fit a new Binomial.
    let trials: Vec<f64> = coin.bernoulli_trials(60);
    let path: std::path::PathBuf = std::env::temp_dir().join("binomial_demo_data.txt");
    let mut file: std::fs::File = std::fs::File::create(&path)?;
    for t in &trials {
        writeln!(file, "{}", t)?;
    }
    drop(file);

    let fitted: Binomial = Binomial::from_file(&path)?;
    println!("Fitted from {}: {}", path.display(), fitted);

    let mut chart: TextChart<std::io::Stdout> = TextChart::new(std::io::stdout());
    coin.render_histogram(&mut chart)?;
    println!();
    coin.render_pmf_plot(&mut chart)?;

    println!("\nP(X <= 10) = {}", coin.cumulative_probability(10)?);

    let more: Binomial = Binomial::new(0.4, 15)?;
    println!("Combined: {}", coin.combine(&more)?);

    std::fs::remove_file(&path)?;
    return Ok(());
}
