//! `query` and `cquery` decoding.

use bzlq_model::Target;
use bzlq_proto::analysis::CqueryResult;
use bzlq_proto::blaze_query::{self as raw, QueryResult};
use prost::Message;

use crate::error::{DecodeError, DecodeResult};
use crate::options::DecodeOptions;
use crate::target::decode_target;

/// Decodes `bazel query --output=proto` into its targets, in query order.
pub fn parse_query(bytes: &[u8]) -> DecodeResult<Vec<Target>> {
    parse_query_with(bytes, &DecodeOptions::default())
}

/// [`parse_query`] with explicit options.
pub fn parse_query_with(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<Vec<Target>> {
    let result = QueryResult::decode(bytes)?;
    decode_targets(&result.target, options)
}

/// Decodes `bazel query --output=streamed_proto`: a sequence of
/// length-delimited `Target` messages.
pub fn parse_query_stream(bytes: &[u8]) -> DecodeResult<Vec<Target>> {
    parse_query_stream_with(bytes, &DecodeOptions::default())
}

/// [`parse_query_stream`] with explicit options.
pub fn parse_query_stream_with(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<Vec<Target>> {
    let targets: Vec<raw::Target> = bzlq_proto::decode_delimited(bytes)?;
    decode_targets(&targets, options)
}

/// Decodes already parsed wire targets, preserving their order.
pub fn decode_targets(targets: &[raw::Target], options: &DecodeOptions) -> DecodeResult<Vec<Target>> {
    let decoded = targets
        .iter()
        .map(|t| decode_target(t, options))
        .collect::<DecodeResult<Vec<_>>>()?;
    tracing::debug!(targets = decoded.len(), "decoded query targets");
    Ok(decoded)
}

/// Decoding of `bazel cquery --output=proto` is not implemented.
///
/// The buffer is still checked to be a well-formed `CqueryResult`, so a
/// corrupt buffer reports [`DecodeError::Wire`]; a well-formed one always
/// reports [`DecodeError::UnsupportedTopLevel`].
pub fn parse_cquery(bytes: &[u8]) -> DecodeResult<Vec<Target>> {
    let result = CqueryResult::decode(bytes)?;
    tracing::debug!(results = result.results.len(), "refusing to decode cquery output");
    Err(DecodeError::UnsupportedTopLevel { message: "cquery" })
}
