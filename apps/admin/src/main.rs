use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match forge_admin::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("forge-admin: {e}");
            ExitCode::FAILURE
        }
    }
}
