#[tokio::main]
async fn main() -> anyhow::Result<()> {
    inspicode::start_server().await
}
