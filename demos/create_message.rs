//! Single-shot message completion.
//!
//! Run with: ANTHROPIC_API_KEY=... cargo run --example create_message

use anthropic_client::models::message::{CLAUDE_3_5_SONNET, MessageRequest};
use anthropic_client::{Client, ClientConfig, ContentBlock, InputMessage, Role};

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
        vec![InputMessage::text(Role::User, "Say hello in one sentence.")],
        256,
    );

    let response = client.create_message(&request).await?;

    println!("id: {}", response.id);
    println!("stop_reason: {:?}", response.stop_reason);
    for block in &response.content {
        if let ContentBlock::Text { text } = block {
            println!("{text}");
        }
    }
    println!(
        "usage: {} in / {} out",
        response.usage.input_tokens, response.usage.output_tokens
    );

    Ok(())
}
