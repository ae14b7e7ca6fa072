// src/main.rs

use procwatch::{cli, logging, run};

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("procwatch: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run_main() -> procwatch::errors::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
