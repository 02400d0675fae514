//! Varint length-delimited message streams.
//!
//! `bazel query --output=streamed_proto` writes each `Target` as a varint
//! length followed by the message bytes, with no enclosing `QueryResult`.

use prost::{DecodeError, Message};

/// Decodes every length-delimited message in `bytes`, in stream order.
///
/// A truncated trailing frame fails the whole decode.
pub fn decode_delimited<M: Message + Default>(mut bytes: &[u8]) -> Result<Vec<M>, DecodeError> {
    let mut messages = Vec::new();
    while !bytes.is_empty() {
        messages.push(M::decode_length_delimited(&mut bytes)?);
    }
    Ok(messages)
}

/// Encodes messages as a length-delimited stream.
pub fn encode_delimited<'a, M, I>(messages: I) -> Vec<u8>
where
    M: Message + 'a,
    I: IntoIterator<Item = &'a M>,
{
    let mut out = Vec::new();
    for message in messages {
        out.extend(message.encode_length_delimited_to_vec());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RuleClass;

    fn rule_class(id: u32, name: &str) -> RuleClass {
        RuleClass {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_stream_is_empty() {
        let decoded: Vec<RuleClass> = decode_delimited(&[]).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn stream_preserves_order() {
        let input = vec![rule_class(1, "cc_library"), rule_class(2, "genrule")];
        let bytes = encode_delimited(&input);
        let decoded: Vec<RuleClass> = decode_delimited(&bytes).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let bytes = encode_delimited(&[rule_class(7, "java_binary")]);
        let result: Result<Vec<RuleClass>, _> = decode_delimited(&bytes[..bytes.len() - 2]);
        assert!(result.is_err());
    }
}
