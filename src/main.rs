use env_logger::Env;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match readme_backdate::run().await {
        Ok(summary) => {
            log::info!(
                "Committed {} to {}/{}@{} from {}/{}:{}",
                summary.commit_sha,
                summary.owner,
                summary.repository,
                summary.branch,
                summary.source.owner,
                summary.source.repository,
                summary.source.path
            );
            println!("Commit created successfully!");
        }
        Err(err) => eprintln!("{}", err.diagnostic()),
    }
}
