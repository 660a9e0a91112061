use anthropic_client::models::message::MessageRequest;
use anthropic_client::{
    ContentBlock, ImageSource, InputMessage, MediaType, MessageStreamEvent, Role,
};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_request_encode(c: &mut Criterion) {
    let request = MessageRequest::new(
        "claude-3-5-sonnet-20240620",
        vec![
            InputMessage::text(Role::User, "What's in this image?"),
            InputMessage::blocks(
                Role::Assistant,
                vec![ContentBlock::text("Let me take a look.")],
            ),
            InputMessage::blocks(
                Role::User,
                vec![ContentBlock::image(ImageSource::base64(
                    MediaType::Png,
                    "iVBORw0KGgoAAAANSUhEUg",
                ))],
            ),
        ],
        1024,
    );

    c.bench_function("encode_message_request", |b| {
        b.iter(|| black_box(serde_json::to_vec(black_box(&request)).unwrap()));
    });
}

fn benchmark_message_decode(c: &mut Criterion) {
    let wire = r#"{"role":"user","content":[{"type":"text","text":"Hello"},{"type":"tool_result","tool_use_id":"toolu_1","content":{"type":"text","text":"42"}}]}"#;

    c.bench_function("decode_input_message", |b| {
        b.iter(|| black_box(serde_json::from_str::<InputMessage>(black_box(wire)).unwrap()));
    });
}

fn benchmark_event_decode(c: &mut Criterion) {
    let frames = [
        r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hello"}}"#,
        r#"{"type":"content_block_delta","index":0,"delta":{"type":"input_json_delta","partial_json":"{\"a\":1"}}"#,
        r#"{"type":"content_block_stop","index":0}"#,
        r#"{"type":"message_stop"}"#,
    ];
    let bytes: usize = frames.iter().map(|f| f.len()).sum();

    let mut group = c.benchmark_group("stream_events");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("decode_event_frames", |b| {
        b.iter(|| {
            for frame in &frames {
                black_box(serde_json::from_str::<MessageStreamEvent>(frame).unwrap());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_request_encode,
    benchmark_message_decode,
    benchmark_event_decode
);
criterion_main!(benches);
