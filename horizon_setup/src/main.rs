//! Beyond the Horizon project setup
//!
//! Creates the project directory tree and starter configuration in the
//! current working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin horizon-setup
//! ```

use std::io;
use std::process::ExitCode;

use horizon_content::{BANNER, FAILURE_HINT, RULE};
use horizon_setup::{init_logging, run_setup, SetupOptions};
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    println!("{}", BANNER);
    println!("{}", RULE);

    let options = SetupOptions::default();
    let result = run_setup(&options, &mut io::stdout().lock());

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(path = ?e.path(), "setup failed: {}", e);
            println!("\n❌ 设置过程中出现错误: {}", e);
            println!("{}", FAILURE_HINT);
            ExitCode::FAILURE
        }
    }
}
