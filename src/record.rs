/// One input read: an optional identifier and an opaque symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    pub id: Option<String>,
    pub seq: Vec<u8>,
}

impl Read {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: Some(id.into()),
            seq: seq.into(),
        }
    }

    /// Read without identifier; written as `read<N>/`.
    pub fn anonymous(seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: None,
            seq: seq.into(),
        }
    }

    #[inline]
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Numbered, quality-annotated record as it lands in an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl SimRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
