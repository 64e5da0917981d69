use std::path::Path;
use std::sync::Arc;

use super::{ImageDecoder, Jpeg, Png};

/// A caller-owned table of decoders, looked up by token or file extension.
///
/// Nothing here is global: each caller builds its own registry, and the
/// mashup pipeline never consults one (every [`Input`](crate::pipeline::Input)
/// carries its decoder).
#[derive(Clone, Default)]
pub struct FormatRegistry {
    decoders: Vec<Arc<dyn ImageDecoder>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in PNG and JPEG formats.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Png));
        registry.register(Arc::new(Jpeg::new()));
        registry
    }

    /// Add a decoder unless one with the same name and magic is already
    /// registered. Returns whether the decoder was added.
    pub fn register(&mut self, decoder: Arc<dyn ImageDecoder>) -> bool {
        let duplicate = self
            .decoders
            .iter()
            .any(|d| d.name() == decoder.name() && d.magic() == decoder.magic());
        if duplicate {
            tracing::debug!(
                name = decoder.name(),
                magic = decoder.magic(),
                "Format already registered"
            );
            return false;
        }
        tracing::debug!(
            name = decoder.name(),
            magic = decoder.magic(),
            "Registered format"
        );
        self.decoders.push(decoder);
        true
    }

    /// Find a decoder whose magic token or name matches `token`
    /// (case-insensitive). Magic tokens win over names; earlier
    /// registrations win over later ones.
    pub fn lookup(&self, token: &str) -> Option<Arc<dyn ImageDecoder>> {
        let token = token.trim_start_matches('.');
        self.decoders
            .iter()
            .find(|d| d.magic().eq_ignore_ascii_case(token))
            .or_else(|| {
                self.decoders
                    .iter()
                    .find(|d| d.name().eq_ignore_ascii_case(token))
            })
            .cloned()
    }

    /// Find a decoder for `path` by its extension.
    pub fn for_path(&self, path: &Path) -> Option<Arc<dyn ImageDecoder>> {
        let ext = path.extension()?.to_str()?;
        self.lookup(ext)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ImageDecoder> + '_ {
        self.decoders.iter().map(|d| &**d)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
