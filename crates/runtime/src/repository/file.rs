//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::{RepositoryError, Result, SaveGame, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// Stores each slot as `{slot}.sav` in the base directory.
///
/// # File Format
///
/// ```text
/// +---------+---------+----------------------+------------------+
/// | "RGSV"  | version | SHA-256 of payload   | bincode payload  |
/// | 4 bytes | 1 byte  | 32 bytes             | rest of the file |
/// +---------+---------+----------------------+------------------+
/// ```
///
/// The digest is checked before the payload is decoded, so a truncated or
/// tampered file is rejected instead of producing a bogus world.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    const MAGIC: &'static [u8; 4] = b"RGSV";
    const FORMAT_VERSION: u8 = 1;
    const HEADER_LEN: usize = 4 + 1 + 32;

    /// Create a new file-based save repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a save file.
    pub fn save_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{slot}.sav"))
    }

    fn encode(game: &SaveGame) -> Result<Vec<u8>> {
        let payload =
            bincode::serialize(game).map_err(|e| RepositoryError::Encoding(e.to_string()))?;
        let digest = Sha256::digest(&payload);

        let mut bytes = Vec::with_capacity(Self::HEADER_LEN + payload.len());
        bytes.extend_from_slice(Self::MAGIC);
        bytes.push(Self::FORMAT_VERSION);
        bytes.extend_from_slice(&digest);
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<SaveGame> {
        if bytes.len() < Self::HEADER_LEN {
            return Err(RepositoryError::Truncated {
                len: bytes.len(),
                header: Self::HEADER_LEN,
            });
        }
        let (header, payload) = bytes.split_at(Self::HEADER_LEN);
        if &header[..4] != Self::MAGIC {
            return Err(RepositoryError::BadMagic);
        }
        if header[4] != Self::FORMAT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: header[4],
                expected: Self::FORMAT_VERSION,
            });
        }
        if Sha256::digest(payload).as_slice() != &header[5..] {
            return Err(RepositoryError::ChecksumMismatch);
        }
        bincode::deserialize(payload).map_err(|e| RepositoryError::Encoding(e.to_string()))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, game: &SaveGame) -> Result<()> {
        let path = self.save_path(slot);
        let temp_path = path.with_extension("sav.tmp");

        let bytes = Self::encode(game)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveGame>> {
        let path = self.save_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let game = Self::decode(&bytes)?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(game))
    }

    fn exists(&self, slot: &str) -> bool {
        self.save_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.save_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }
}
