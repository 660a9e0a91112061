//! Streaming message completion, printed delta by delta.
//!
//! Run with: ANTHROPIC_API_KEY=... cargo run --example streaming

use std::io::Write;

use anthropic_client::models::message::{CLAUDE_3_5_SONNET, MessageRequest};
use anthropic_client::{Client, ClientConfig, InputMessage, MessageStreamDelta, Role};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let client = Client::with_config(ClientConfig::from_env()?)?;

    let request = MessageRequest::new(
        CLAUDE_3_5_SONNET,
        vec![InputMessage::text(
            Role::User,
            "Write a haiku about byte streams.",
        )],
        512,
    );

    let mut stream = client.create_message_stream(request).await?;

    while let Some(delta) = stream.recv().await? {
        match delta {
            MessageStreamDelta::TextDelta { text } => {
                print!("{text}");
                std::io::stdout().flush()?;
            }
            MessageStreamDelta::InputJsonDelta { partial_json } => {
                print!("{partial_json}");
            }
        }
    }
    println!();

    stream.close();
    Ok(())
}
