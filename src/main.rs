use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = huechat::cli::Cli::parse();
    let exit_code = huechat::run(cli).await;
    std::process::exit(exit_code);
}
