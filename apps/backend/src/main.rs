#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocabdrill_backend::run().await
}
