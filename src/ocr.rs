//! OCR collaborator boundary.
//!
//! The engine never touches image bytes; an external backend maps them to a
//! single extracted text string, or fails. [`TextExtractor`] is the only
//! contract that backend has to satisfy. "No text detected" is a successful
//! call returning `None`, distinct from a backend failure.
//!
//! [`CachingExtractor`] is an optional memoization layer for repeated
//! identical images. It is keyed by the full input byte content, never a
//! derived summary, and sits entirely outside the engine's contract.

use thiserror::Error;

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// Errors from the external OCR backend.
///
/// These are strictly outside the verification engine; the surrounding
/// application handles them before the engine is ever invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// The backend rejected or could not load its credentials.
    #[error("ocr credentials error: {0}")]
    Credentials(String),
    /// The backend call itself failed (quota, transport, malformed image).
    #[error("ocr backend error: {0}")]
    Backend(String),
}

/// Maps raw image bytes to extracted text.
///
/// `Ok(None)` means the call succeeded but no text was found; empty image
/// bytes are treated the same way.
pub trait TextExtractor {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<Option<String>, OcrError>;
}

/// Byte-content-keyed memoization wrapper around any [`TextExtractor`].
///
/// Successful extractions (including "no text found") are cached; errors are
/// not, so transient backend failures retry on the next call. Eviction is
/// oldest-first once `capacity` distinct inputs have been seen.
pub struct CachingExtractor<E> {
    inner: E,
    capacity: usize,
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<Vec<u8>, Option<String>>,
    order: VecDeque<Vec<u8>>,
}

impl<E: TextExtractor> CachingExtractor<E> {
    /// Default capacity matches the upstream OCR service's memoization size.
    const DEFAULT_CAPACITY: usize = 100;

    pub fn new(inner: E) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
    }

    /// A capacity of zero disables caching and delegates every call.
    pub fn with_capacity(inner: E, capacity: usize) -> Self {
        Self {
            inner,
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }
}

impl<E: TextExtractor> TextExtractor for CachingExtractor<E> {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<Option<String>, OcrError> {
        if image_bytes.is_empty() {
            return Ok(None);
        }
        if self.capacity == 0 {
            return self.inner.extract_text(image_bytes);
        }

        {
            let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(text) = state.entries.get(image_bytes) {
                return Ok(text.clone());
            }
        }

        // The lock is released across the backend call so slow extractions
        // do not serialize unrelated callers.
        let text = self.inner.extract_text(image_bytes)?;

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.entries.contains_key(image_bytes) {
            if state.entries.len() >= self.capacity {
                if let Some(oldest) = state.order.pop_front() {
                    state.entries.remove(&oldest);
                }
            }
            state.entries.insert(image_bytes.to_vec(), text.clone());
            state.order.push_back(image_bytes.to_vec());
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingExtractor {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingExtractor {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextExtractor for &CountingExtractor {
        fn extract_text(&self, image_bytes: &[u8]) -> Result<Option<String>, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(OcrError::Backend("boom".into()));
            }
            Ok(Some(format!("text-{}", image_bytes[0])))
        }
    }

    #[test]
    fn caches_by_full_byte_content() {
        let backend = CountingExtractor::new(false);
        let cached = CachingExtractor::new(&backend);

        assert_eq!(cached.extract_text(&[1, 2, 3]).unwrap().as_deref(), Some("text-1"));
        assert_eq!(cached.extract_text(&[1, 2, 3]).unwrap().as_deref(), Some("text-1"));
        assert_eq!(backend.calls(), 1);

        // Different byte content is a different key.
        cached.extract_text(&[1, 2, 4]).unwrap();
        assert_eq!(backend.calls(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let backend = CountingExtractor::new(true);
        let cached = CachingExtractor::new(&backend);

        assert!(cached.extract_text(&[9]).is_err());
        assert!(cached.extract_text(&[9]).is_err());
        assert_eq!(backend.calls(), 2);
    }

    #[test]
    fn empty_image_bytes_short_circuit_to_no_text() {
        let backend = CountingExtractor::new(false);
        let cached = CachingExtractor::new(&backend);

        assert_eq!(cached.extract_text(&[]).unwrap(), None);
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn evicts_oldest_entry_at_capacity() {
        let backend = CountingExtractor::new(false);
        let cached = CachingExtractor::with_capacity(&backend, 2);

        cached.extract_text(&[1]).unwrap();
        cached.extract_text(&[2]).unwrap();
        cached.extract_text(&[3]).unwrap(); // evicts [1]
        assert_eq!(backend.calls(), 3);

        cached.extract_text(&[2]).unwrap(); // still cached
        assert_eq!(backend.calls(), 3);
        cached.extract_text(&[1]).unwrap(); // re-fetched
        assert_eq!(backend.calls(), 4);
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let backend = CountingExtractor::new(false);
        let cached = CachingExtractor::with_capacity(&backend, 0);

        cached.extract_text(&[5]).unwrap();
        cached.extract_text(&[5]).unwrap();
        assert_eq!(backend.calls(), 2);
    }
}
