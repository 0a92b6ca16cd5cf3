//! PubMed E-utilities access: ESearch for ids, EFetch for MEDLINE text

pub mod client;
pub(crate) mod responses;

pub use client::{FETCH_BATCH_SIZE, MAX_RETRIEVABLE, PubMedClient};
