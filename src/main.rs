fn main() -> anyhow::Result<()> {
    env_logger::init();

    let report = resultwrap::cli::run(std::env::args().skip(1))?;
    for (arg, value) in &report.accepted {
        println!("{} -> {}", arg, value);
    }

    println!("total: {}", report.total);
    Ok(())
}
