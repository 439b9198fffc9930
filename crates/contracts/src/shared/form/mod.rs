//! Entity form model: draft state, submission encoding and modal phases

pub mod draft;
pub mod encode;
pub mod options;
pub mod phase;

pub use draft::{EntityDraft, FieldValue, PairStaging};
pub use encode::{
    encode_json, encode_multipart, prepare_submission, FormPart, HttpMethod, RequestBody,
    SubmitError, SubmitMode, SubmitRequest,
};
pub use options::{build_options, collect_options, OptionsMap, SelectOption};
pub use phase::FormPhase;
