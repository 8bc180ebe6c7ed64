//! Frame a payload behind a network-order header, then parse it back.

use std::io::{self, Read, Write};

use binary_buffer::{Cursor, Network, Record, SeekOrigin};

#[derive(Record, Debug, PartialEq, Eq)]
#[record(order = "network")]
struct FrameHeader {
    magic: u32,
    version: u8,
    flags: u8,
    payload_len: u16,
    sequence: u64,
}

const MAGIC: u32 = 0x4242_5546;

fn encode_frame(buf: &mut [u8], sequence: u64, payload: &[u8]) -> io::Result<usize> {
    let payload_len = u16::try_from(payload.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "payload does not fit a u16 length",
        )
    })?;
    let header = FrameHeader {
        magic: MAGIC,
        version: 1,
        flags: 0,
        payload_len,
        sequence,
    };
    let mut cursor = Cursor::new(buf, 0)?;
    cursor.write_record::<FrameHeader, Network>(&header)?;
    cursor.write_all(payload)?;
    Ok(cursor.offset())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut buf = [0u8; 64];
    let written = encode_frame(&mut buf, 7, b"hello")?;
    println!("frame ({written} bytes): {:02x?}", &buf[..written]);

    let mut cursor = Cursor::new(&buf[..written], 0)?;
    let header = cursor.read_record::<FrameHeader, Network>()?;
    assert_eq!(header.magic, MAGIC);

    let mut payload = vec![0u8; usize::from(header.payload_len)];
    cursor.read_exact(&mut payload)?;
    println!("header: {header:?}");
    println!("payload: {}", String::from_utf8_lossy(&payload));

    // Jump back and read just the sequence number.
    cursor.seek(8, SeekOrigin::Begin)?;
    println!("sequence again: {}", cursor.read_u64_network()?);

    let oversized = vec![0u8; usize::from(u16::MAX) + 1];
    let mut big = vec![0u8; 16 + oversized.len()];
    if let Err(err) = encode_frame(&mut big, 8, &oversized) {
        println!("oversized payload rejected: {err}");
    }

    Ok(())
}
