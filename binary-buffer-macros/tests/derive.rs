use binary_buffer::{BufferError, Cursor, Host, Network, Record};

#[derive(Record, Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Record, Debug, PartialEq, Eq)]
#[record(order = "network")]
struct IpHeader {
    version_ihl: u8,
    tos: u8,
    total_length: u16,
    identification: u16,
    flags_fragment: u16,
    ttl: u8,
    protocol: u8,
    checksum: u16,
    source: [u8; 4],
    destination: [u8; 4],
}

#[derive(Record, Debug, PartialEq, Eq)]
struct Pair(u16, i64);

#[derive(Record, Debug, PartialEq, Eq)]
struct Empty;

#[derive(Record, Debug, PartialEq, Eq)]
#[record(order = "host")]
struct Segment {
    start: Point,
    end: Point,
    tag: u8,
}

#[test]
fn width_is_sum_of_fields() {
    assert_eq!(Point::WIDTH, 8);
    assert_eq!(IpHeader::WIDTH, 20);
    assert_eq!(Pair::WIDTH, 10);
    assert_eq!(Empty::WIDTH, 0);
    assert_eq!(Segment::WIDTH, 17);
}

#[test]
fn unpinned_record_follows_caller_order() {
    let p = Point { x: 1, y: -1 };

    let mut buf = [0u8; 8];
    Cursor::new(&mut buf[..], 0)
        .unwrap()
        .write_record::<Point, Network>(&p)
        .unwrap();
    assert_eq!(buf, [0, 0, 0, 1, 0xFF, 0xFF, 0xFF, 0xFF]);

    Cursor::new(&mut buf[..], 0)
        .unwrap()
        .write_record::<Point, Host>(&p)
        .unwrap();
    assert_eq!(buf, [1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);

    let mut cursor = Cursor::new(&buf[..], 0).unwrap();
    assert_eq!(cursor.read_record::<Point, Host>().unwrap(), p);
}

#[test]
fn pinned_record_ignores_caller_order() {
    let bytes = [
        0x45, 0x00, 0x00, 0x54, 0x1c, 0x46, 0x40, 0x00, 0x40, 0x01, 0xb1, 0xe6, 0xc0, 0xa8, 0x00,
        0x01, 0xc0, 0xa8, 0x00, 0xc7,
    ];
    let expected = IpHeader {
        version_ihl: 0x45,
        tos: 0,
        total_length: 84,
        identification: 0x1c46,
        flags_fragment: 0x4000,
        ttl: 64,
        protocol: 1,
        checksum: 0xb1e6,
        source: [192, 168, 0, 1],
        destination: [192, 168, 0, 199],
    };

    let mut cursor = Cursor::new(&bytes[..], 0).unwrap();
    assert_eq!(cursor.read_record::<IpHeader, Host>().unwrap(), expected);
    assert_eq!(cursor.offset(), 20);

    let mut out = [0u8; 20];
    Cursor::new(&mut out[..], 0)
        .unwrap()
        .write_record::<IpHeader, Host>(&expected)
        .unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn tuple_struct_roundtrip() {
    let mut buf = [0u8; 12];
    let mut cursor = Cursor::new(&mut buf[..], 1).unwrap();
    cursor
        .write_record::<Pair, Network>(&Pair(0xABCD, -2))
        .unwrap();
    assert_eq!(cursor.offset(), 11);

    cursor.set_offset(1).unwrap();
    assert_eq!(
        cursor.read_record::<Pair, Network>().unwrap(),
        Pair(0xABCD, -2)
    );
    assert_eq!(buf[1..3], [0xAB, 0xCD]);
}

#[test]
fn nested_records_use_pinned_order() {
    let seg = Segment {
        start: Point { x: 2, y: 3 },
        end: Point { x: -4, y: 5 },
        tag: 9,
    };
    let mut buf = [0u8; 17];
    Cursor::new(&mut buf[..], 0)
        .unwrap()
        .write_record::<Segment, Network>(&seg)
        .unwrap();
    assert_eq!(buf[..4], [2, 0, 0, 0]);
    assert_eq!(buf[16], 9);

    let mut cursor = Cursor::new(&buf[..], 0).unwrap();
    assert_eq!(cursor.read_record::<Segment, Network>().unwrap(), seg);
}

#[test]
fn empty_record_reads_nothing() {
    let buf = [1u8];
    let mut cursor = Cursor::new(&buf[..], 0).unwrap();
    assert_eq!(cursor.read_record::<Empty, Host>().unwrap(), Empty);
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn short_buffer_is_rejected_whole() {
    let buf = [0u8; 19];
    let mut cursor = Cursor::new(&buf[..], 0).unwrap();
    assert_eq!(
        cursor.read_record::<IpHeader, Network>(),
        Err(BufferError::OutOfRange {
            offset: 0,
            width: 20,
            len: 19
        })
    );
    assert_eq!(cursor.offset(), 0);
}
