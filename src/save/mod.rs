//! Checksummed binary snapshots of the [`World`].
//!
//! Layout:
//! - Version magic (8 bytes, little endian)
//! - Payload length (4 bytes, little endian)
//! - bincode payload
//! - SHA-256 over everything above (32 bytes)

use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::error::SaveError;
use crate::core::world::World;
use directories::ProjectDirs;
use log::info;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = 8 + 4;

/// Serializes a snapshot into the checksummed format.
pub fn encode_snapshot(world: &World) -> Result<Vec<u8>, SaveError> {
    let data = bincode::serialize(world)?;
    let data_len = data.len() as u32;

    let mut bytes = Vec::with_capacity(HEADER_LEN + data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);

    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

/// Verifies and deserializes a snapshot.
pub fn decode_snapshot(bytes: &[u8]) -> Result<World, SaveError> {
    if bytes.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(SaveError::Truncated);
    }

    let mut version_bytes = [0u8; 8];
    version_bytes.copy_from_slice(&bytes[..8]);
    let version = u64::from_le_bytes(version_bytes);
    if version != SAVE_VERSION_MAGIC {
        return Err(SaveError::BadVersion {
            expected: SAVE_VERSION_MAGIC,
            found: version,
        });
    }

    let mut length_bytes = [0u8; 4];
    length_bytes.copy_from_slice(&bytes[8..HEADER_LEN]);
    let data_len = u32::from_le_bytes(length_bytes) as usize;

    let data_end = HEADER_LEN + data_len;
    if bytes.len() < data_end + CHECKSUM_LEN {
        return Err(SaveError::Truncated);
    }

    let stored_checksum = &bytes[data_end..data_end + CHECKSUM_LEN];
    let computed_checksum = Sha256::digest(&bytes[..data_end]);
    if stored_checksum != computed_checksum.as_slice() {
        return Err(SaveError::ChecksumMismatch);
    }

    Ok(bincode::deserialize(&bytes[HEADER_LEN..data_end])?)
}

/// Reads and writes the snapshot file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform data directory for `hollow`, creating it if needed.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "hollow").ok_or(SaveError::NoSaveDirectory)?;
        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            save_path: data_dir.join("savegame.dat"),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save(&self, world: &World) -> Result<(), SaveError> {
        let bytes = encode_snapshot(world)?;
        fs::write(&self.save_path, bytes)?;
        info!("saved level {} to {}", world.dungeon_level, self.save_path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<World, SaveError> {
        let bytes = fs::read(&self.save_path)?;
        decode_snapshot(&bytes)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> Result<(), SaveError> {
        if self.save_exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{new_player, Race, Title};
    use tempfile::TempDir;

    fn sample_world() -> World {
        let mut world = new_player("Saver", Race::Skrell, Title::Scientist);
        world.dungeon_level = 3;
        world.log.info("Something happened.");
        world
    }

    #[test]
    fn test_encode_decode_preserves_world() {
        let world = sample_world();
        let bytes = encode_snapshot(&world).unwrap();
        assert_eq!(decode_snapshot(&bytes).unwrap(), world);
    }

    #[test]
    fn test_flipped_byte_fails_checksum() {
        let mut bytes = encode_snapshot(&sample_world()).unwrap();
        bytes[HEADER_LEN + 3] ^= 0xFF;
        assert!(matches!(decode_snapshot(&bytes), Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let mut bytes = encode_snapshot(&sample_world()).unwrap();
        bytes[0] ^= 0x01;
        assert!(matches!(decode_snapshot(&bytes), Err(SaveError::BadVersion { .. })));
    }

    #[test]
    fn test_truncated_rejected() {
        let bytes = encode_snapshot(&sample_world()).unwrap();
        assert!(matches!(decode_snapshot(&bytes[..10]), Err(SaveError::Truncated)));
        assert!(matches!(
            decode_snapshot(&bytes[..bytes.len() - 1]),
            Err(SaveError::Truncated)
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::with_path(dir.path().join("save.dat"));
        assert!(!manager.save_exists());

        let world = sample_world();
        manager.save(&world).unwrap();
        assert!(manager.save_exists());
        assert_eq!(manager.load().unwrap(), world);

        manager.delete().unwrap();
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::with_path(dir.path().join("nothing.dat"));
        assert!(matches!(manager.load(), Err(SaveError::Io(_))));
    }
}
