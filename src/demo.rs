//! Runs one buffer through both modes and keeps all four results side
//! by side, which makes ECB's pattern leak easy to see when the
//! buffer is raw grayscale pixels.
//!
//! Every output is cut to the input's length, ciphertext included, the
//! same way you'd have to in order to write it back out with the
//! original image dimensions.  Decryption always works from the
//! untruncated in-memory ciphertext.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, info_span};

use crate::{frame, Error, Iv, Key, Mode, Result};

/// The four buffers produced by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub ecb_encrypted: Vec<u8>,
    pub ecb_decrypted: Vec<u8>,
    pub cbc_encrypted: Vec<u8>,
    pub cbc_decrypted: Vec<u8>,
}

/// Where [`run_files`] writes each of the [`Outputs`].
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub ecb_encrypted: PathBuf,
    pub ecb_decrypted: PathBuf,
    pub cbc_encrypted: PathBuf,
    pub cbc_decrypted: PathBuf,
}

impl OutputPaths {
    /// Standard file names under `dir`.
    pub fn in_dir(dir: &Path) -> OutputPaths {
        OutputPaths {
            ecb_encrypted: dir.join("ecb_encrypted.bin"),
            ecb_decrypted: dir.join("ecb_decrypted.bin"),
            cbc_encrypted: dir.join("cbc_encrypted.bin"),
            cbc_decrypted: dir.join("cbc_decrypted.bin"),
        }
    }
}

fn round_trip(mode: Mode, key: &Key, buf: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let _span = info_span!("mode", %mode).entered();
    let (blocks, len) = frame::to_blocks(buf);
    let crypted = mode.encrypt(key, &blocks);
    let decrypted = mode.decrypt(key, &crypted);
    info!(blocks = blocks.len(), "encrypted and decrypted");
    (frame::from_blocks(&crypted, len), frame::from_blocks(&decrypted, len))
}

/// Encrypts and decrypts `buf` under both ECB and CBC.
pub fn run(buf: &[u8], key: &Key, iv: &Iv) -> Outputs {
    let (ecb_encrypted, ecb_decrypted) = round_trip(Mode::Ecb, key, buf);
    let (cbc_encrypted, cbc_decrypted) = round_trip(Mode::Cbc(*iv), key, buf);
    Outputs {
        ecb_encrypted,
        ecb_decrypted,
        cbc_encrypted,
        cbc_decrypted,
    }
}

/// Reads `input`, does [`run`] on its bytes, and writes the results to
/// `paths`.
pub fn run_files(input: &Path, paths: &OutputPaths, key: &Key, iv: &Iv) -> Result<Outputs> {
    let buf = fs::read(input).map_err(|e| Error::io(input, e))?;
    info!(input = %input.display(), bytes = buf.len(), "read input");

    let outputs = run(&buf, key, iv);
    for (path, bytes) in [
        (&paths.ecb_encrypted, &outputs.ecb_encrypted),
        (&paths.ecb_decrypted, &outputs.ecb_decrypted),
        (&paths.cbc_encrypted, &outputs.cbc_encrypted),
        (&paths.cbc_decrypted, &outputs.cbc_decrypted),
    ] {
        fs::write(path, bytes).map_err(|e| Error::io(path.as_path(), e))?;
        info!(output = %path.display(), "wrote output");
    }
    Ok(outputs)
}
