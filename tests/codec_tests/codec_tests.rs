//! Codec Tests
//!
//! Tests for the byte codec and the commands built with it.

use bytes::Bytes;
use kvlink::protocol::{decode, encode, Command, CommandType, WireBytes};
use redis::{FromRedisValue, ToRedisArgs, Value};

// =============================================================================
// Encode/Decode Tests
// =============================================================================

#[test]
fn test_decode_inverts_encode() {
    let inputs: Vec<Bytes> = vec![
        Bytes::new(),
        Bytes::from_static(&[0]),
        Bytes::from_static(&[10, 12, 13]),
        Bytes::from((0..=255u8).collect::<Vec<_>>()),
        Bytes::from(vec![0xffu8; 64 * 1024]),
    ];

    for input in inputs {
        assert_eq!(decode(encode(input.clone())), input);
    }
}

#[test]
fn test_encode_does_not_copy_or_pad() {
    let input = Bytes::from_static(b"\x00abc\x00");
    let wire = encode(input.clone());

    assert_eq!(wire.len(), input.len());
    assert_eq!(wire.as_slice(), &input[..]);
}

#[test]
fn test_empty_input() {
    let wire = encode(Bytes::new());
    assert!(wire.is_empty());
    assert_eq!(decode(wire), Bytes::new());
}

// =============================================================================
// Client Hook Tests
// =============================================================================

#[test]
fn test_to_redis_args_is_single_raw_argument() {
    let wire = encode(Bytes::from_static(&[1, 2, 3]));
    assert_eq!(wire.to_redis_args(), vec![vec![1u8, 2, 3]]);

    let empty = encode(Bytes::new());
    assert_eq!(empty.to_redis_args(), vec![Vec::<u8>::new()]);
}

#[test]
fn test_from_bulk_string() {
    let value = Value::BulkString(vec![10, 12, 13]);
    let wire = WireBytes::from_redis_value(&value).unwrap();
    assert_eq!(decode(wire), Bytes::from_static(&[10, 12, 13]));

    let owned = WireBytes::from_owned_redis_value(value).unwrap();
    assert_eq!(owned.as_slice(), &[10, 12, 13]);
}

#[test]
fn test_from_simple_string() {
    let value = Value::SimpleString("PONG".to_string());
    let wire = WireBytes::from_redis_value(&value).unwrap();
    assert_eq!(wire.as_slice(), b"PONG");
}

#[test]
fn test_nil_is_no_value() {
    let decoded = Option::<WireBytes>::from_redis_value(&Value::Nil).unwrap();
    assert!(decoded.is_none());
}

#[test]
fn test_integer_reply_is_rejected() {
    let result = WireBytes::from_redis_value(&Value::Int(7));
    assert!(result.is_err());
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_get_command_packs_key_verbatim() {
    let cmd = Command::Get {
        key: Bytes::from_static(&[123]),
    };
    assert_eq!(cmd.command_type(), CommandType::Get);
    assert_eq!(
        cmd.to_redis_cmd().get_packed_command(),
        b"*2\r\n$3\r\nGET\r\n$1\r\n{\r\n".to_vec()
    );
}

#[test]
fn test_put_command_is_set() {
    let cmd = Command::Put {
        key: Bytes::from_static(b"k"),
        value: Bytes::from_static(&[10, 12, 13]),
    };
    assert_eq!(cmd.command_type().name(), "SET");
    assert_eq!(
        cmd.to_redis_cmd().get_packed_command(),
        b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$3\r\n\n\x0c\r\r\n".to_vec()
    );
}

#[test]
fn test_put_command_with_empty_value() {
    let cmd = Command::Put {
        key: Bytes::from_static(b"k"),
        value: Bytes::new(),
    };
    assert_eq!(
        cmd.to_redis_cmd().get_packed_command(),
        b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$0\r\n\r\n".to_vec()
    );
}

#[test]
fn test_ping_command_has_no_arguments() {
    assert_eq!(
        Command::Ping.to_redis_cmd().get_packed_command(),
        b"*1\r\n$4\r\nPING\r\n".to_vec()
    );
}
