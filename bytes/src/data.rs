/// A buffer of bytes handed across the host boundary.
///
/// Requests arrive as `Data` and responses leave as `Data`. Functions that
/// only pass a payload through can keep it as `Data` and never look inside.
pub struct Data {
    buffer: Vec<u8>,
}

impl Data {
    /// Borrow the buffered bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Turn the Data into a plain `Vec<u8>`.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl From<Vec<u8>> for Data {
    fn from(buffer: Vec<u8>) -> Self {
        Self { buffer }
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        value.into_bytes().into()
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        value.as_bytes().to_vec().into()
    }
}

// Payloads may carry personal data; only the length is printed.
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("length", &self.buffer.len())
            .finish()
    }
}
