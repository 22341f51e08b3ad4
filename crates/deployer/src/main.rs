use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(
        "warn,deployer=debug,blueprint=debug",
        tracing::Level::ERROR.into(),
    );
    tracing::info!("running deployer with validated arguments:\n{}", args);
    if let Err(err) = deployer::main(args).await {
        tracing::error!(?err, "deployment failed");
        std::process::exit(1);
    }
}
