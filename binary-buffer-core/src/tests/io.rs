extern crate std;

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::vec::Vec;

use super::SAMPLE;
use crate::Cursor;

#[test]
fn read_copies_from_offset() {
    let mut cursor = Cursor::new(&SAMPLE[..], 6).unwrap();
    let mut out = [0u8; 3];
    cursor.read_exact(&mut out).unwrap();
    assert_eq!(out, [0x66, 0x77, 0x88]);
    assert_eq!(cursor.offset(), 9);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, [0x99]);
    assert_eq!(Read::read(&mut cursor, &mut out).unwrap(), 0);
}

#[test]
fn write_stops_at_end() {
    let mut buf = [0u8; 4];
    let mut cursor = Cursor::new(&mut buf[..], 1).unwrap();
    assert_eq!(Write::write(&mut cursor, &[1, 2, 3, 4, 5]).unwrap(), 3);
    assert_eq!(cursor.offset(), 4);
    assert_eq!(Write::write(&mut cursor, &[6]).unwrap(), 0);
    assert_eq!(
        cursor.write_all(&[7]).unwrap_err().kind(),
        ErrorKind::WriteZero
    );
    cursor.flush().unwrap();
    assert_eq!(buf, [0, 1, 2, 3]);
}

#[test]
fn seek_maps_onto_cursor_bounds() {
    let mut cursor = Cursor::new(&SAMPLE[..], 0).unwrap();
    assert_eq!(Seek::seek(&mut cursor, SeekFrom::End(0)).unwrap(), 10);
    assert_eq!(Seek::seek(&mut cursor, SeekFrom::Current(-4)).unwrap(), 6);
    assert_eq!(Seek::seek(&mut cursor, SeekFrom::Start(2)).unwrap(), 2);
    assert_eq!(cursor.stream_position().unwrap(), 2);

    let err = Seek::seek(&mut cursor, SeekFrom::Start(11)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    let err = Seek::seek(&mut cursor, SeekFrom::Current(-3)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn buffer_errors_convert_to_io_errors() {
    let mut cursor = Cursor::new(&SAMPLE[..], 8).unwrap();
    let err: std::io::Error = cursor.read_u32().unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}
