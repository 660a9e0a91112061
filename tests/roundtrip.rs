use anthropic_client::models::message::MessageRequest;
use anthropic_client::{ContentBlock, ImageSource, InputMessage, MediaType, Role, ToolResultContent};

#[test]
fn test_string_content_round_trip() {
    let request = MessageRequest::new(
        "mock",
        vec![InputMessage::text(Role::User, "content")],
        0,
    );

    let wire = serde_json::to_string(&request).unwrap();
    assert_eq!(
        wire,
        r#"{"model":"mock","messages":[{"role":"user","content":"content"}],"max_tokens":0}"#
    );

    let decoded: MessageRequest = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded.messages[0], request.messages[0]);

    // Decoding then re-encoding reproduces the identical byte sequence.
    assert_eq!(serde_json::to_string(&decoded).unwrap(), wire);
}

#[test]
fn test_block_content_round_trip() {
    let blocks = vec![
        ContentBlock::text("Look at this:"),
        ContentBlock::image(ImageSource::base64(MediaType::Webp, "aW1n")),
        ContentBlock::tool_result(
            "toolu_9",
            ToolResultContent::Text {
                text: "done".to_string(),
            },
        ),
    ];
    let message = InputMessage::blocks(Role::User, blocks);

    let wire = serde_json::to_string(&message).unwrap();
    let decoded: InputMessage = serde_json::from_str(&wire).unwrap();

    assert_eq!(decoded, message);
    assert!(decoded.content.is_empty());
    assert_eq!(decoded.content_blocks.len(), 3);
}

#[test]
fn test_all_variants_omit_inactive_fields() {
    let mut input = serde_json::Map::new();
    input.insert("q".to_string(), serde_json::json!("rust"));

    let cases = [
        (ContentBlock::text("hi"), r#"{"type":"text","text":"hi"}"#),
        (ContentBlock::Image { source: None }, r#"{"type":"image"}"#),
        (
            ContentBlock::tool_use("toolu_1", "search", input),
            r#"{"type":"tool_use","id":"toolu_1","name":"search","input":{"q":"rust"}}"#,
        ),
        (
            ContentBlock::ToolResult {
                tool_use_id: "toolu_1".to_string(),
                is_error: false,
                content: None,
            },
            r#"{"type":"tool_result","tool_use_id":"toolu_1"}"#,
        ),
    ];

    for (block, expected) in cases {
        let wire = serde_json::to_string(&block).unwrap();
        assert_eq!(wire, expected);

        let decoded: ContentBlock = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded, block);
    }
}

#[test]
fn test_image_source_rendering() {
    // Unset source: the key is omitted entirely, not emitted as {}.
    let unset = ContentBlock::Image { source: None };
    assert_eq!(
        serde_json::to_string(&unset).unwrap(),
        r#"{"type":"image"}"#
    );

    let set = ContentBlock::image(ImageSource::base64(MediaType::Png, "iVBOR"));
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"{"type":"image","source":{"type":"base64","media_type":"image/png","data":"iVBOR"}}"#
    );
}

#[test]
fn test_polymorphic_content_decode() {
    let simple: InputMessage =
        serde_json::from_str(r#"{"role":"assistant","content":"plain"}"#).unwrap();
    assert_eq!(simple.content, "plain");
    assert!(simple.content_blocks.is_empty());

    let structured: InputMessage = serde_json::from_str(
        r#"{"role":"assistant","content":[{"type":"text","text":"structured"}]}"#,
    )
    .unwrap();
    assert!(structured.content.is_empty());
    assert_eq!(structured.content_blocks, vec![ContentBlock::text("structured")]);
}
