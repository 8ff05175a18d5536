//! Benchmarks for acplink codec and channel operations

use std::io::Cursor;

use acplink::protocol::encode_string;
use acplink::{Channel, Config, Connection};
use acplink::handshake::NullLog;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn codec_benchmarks(c: &mut Criterion) {
    let name = b"swaf_acp_process";

    c.bench_function("encode_string", |b| {
        b.iter(|| encode_string(black_box(name)).unwrap())
    });

    let frame = encode_string(name).unwrap().to_vec();
    c.bench_function("channel_get_string", |b| {
        b.iter(|| {
            let mut channel = Channel::new(Cursor::new(black_box(frame.clone())), std::io::sink());
            channel.get_string().unwrap()
        })
    });

    c.bench_function("channel_put_u16", |b| {
        let mut channel = Channel::new(Cursor::new(Vec::new()), std::io::sink());
        b.iter(|| channel.put_u16(black_box(0x1234)).unwrap())
    });
}

fn handshake_benchmarks(c: &mut Criterion) {
    let mut input = encode_string(b"HOST").unwrap().to_vec();
    input.extend_from_slice(&2u16.to_le_bytes());
    let config = Config::builder().name("HOST").protocol_range(1, 3).build();

    c.bench_function("connect", |b| {
        b.iter(|| {
            let channel = Channel::new(Cursor::new(input.clone()), std::io::sink());
            let mut connection = Connection::with_log(channel, config.clone(), NullLog);
            connection.connect().unwrap()
        })
    });
}

criterion_group!(benches, codec_benchmarks, handshake_benchmarks);
criterion_main!(benches);
