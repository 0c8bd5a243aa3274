//! Release packaging: an archive holding the extension manifest, its docs
//! and the server binary. Windows builds ship as zip, the rest as gzipped
//! tarballs.

use anyhow::{Context, Result, bail};
use flate2::{Compression, write::GzEncoder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

pub const ARCHIVE_STEM: &str = "adk-agent-extension";

/// Files copied from the extension root when present.
pub const EXTENSION_FILES: [&str; 4] = ["gemini-extension.json", "GEMINI.md", "LICENSE", "README.md"];
/// Directory of custom slash commands, copied when present.
pub const COMMANDS_DIR: &str = "commands";

const COMPRESSION_LEVEL: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    Zip,
}

impl ArchiveFormat {
    pub fn for_platform(platform: &str) -> Self {
        if platform == "win32" { Self::Zip } else { Self::TarGz }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::TarGz => "tar.gz",
            Self::Zip => "zip",
        }
    }
}

pub fn archive_name(platform: &str, arch: &str) -> String {
    let format = ArchiveFormat::for_platform(platform);
    format!("{platform}.{arch}.{ARCHIVE_STEM}.{}", format.extension())
}

/// Writes `<out_dir>/<platform>.<arch>.adk-agent-extension.<zip|tar.gz>`
/// and returns its path.
pub fn package(
    root: &Path,
    binary: &Path,
    platform: &str,
    arch: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    if !binary.is_file() {
        bail!("Extension binary not found: {}", binary.display());
    }
    let binary_name = binary
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid binary path: {}", binary.display()))?;

    let mut entries = Vec::new();
    for name in EXTENSION_FILES {
        let path = root.join(name);
        if path.is_file() {
            entries.push((name.to_string(), path));
        }
    }
    let commands = root.join(COMMANDS_DIR);
    if commands.is_dir() {
        collect_dir(&commands, COMMANDS_DIR, &mut entries)?;
    }
    entries.push((binary_name.to_string(), binary.to_path_buf()));

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let archive_path = out_dir.join(archive_name(platform, arch));
    let file = File::create(&archive_path)
        .with_context(|| format!("Failed to create {}", archive_path.display()))?;

    match ArchiveFormat::for_platform(platform) {
        ArchiveFormat::TarGz => write_tar_gz(file, &entries)?,
        ArchiveFormat::Zip => write_zip(file, &entries)?,
    }

    info!(archive = %archive_path.display(), entries = entries.len(), "Packaged extension");
    Ok(archive_path)
}

/// Adds every file below `dir` as `<prefix>/<relative path>`, sorted by name.
fn collect_dir(dir: &Path, prefix: &str, entries: &mut Vec<(String, PathBuf)>) -> Result<()> {
    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    children.sort();

    for path in children {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let archive_name = format!("{prefix}/{name}");
        if path.is_dir() {
            collect_dir(&path, &archive_name, entries)?;
        } else if path.is_file() {
            entries.push((archive_name, path));
        }
    }
    Ok(())
}

fn write_tar_gz(file: File, entries: &[(String, PathBuf)]) -> Result<()> {
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::new(COMPRESSION_LEVEL)));
    for (name, path) in entries {
        builder.append_path_with_name(path, name)?;
    }
    builder.into_inner()?.finish()?;
    Ok(())
}

fn write_zip(file: File, entries: &[(String, PathBuf)]) -> Result<()> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(COMPRESSION_LEVEL)));
    let mut writer = ZipWriter::new(file);
    for (name, path) in entries {
        writer.start_file(name.as_str(), options)?;
        let mut source =
            File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
        std::io::copy(&mut source, &mut writer)?;
    }
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    fn file_entries(archive: &Path) -> Vec<String> {
        let mut archive = tar::Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        let mut names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.header().entry_type().is_file())
            .map(|entry| entry.path().unwrap().display().to_string())
            .collect();
        names.sort();
        names
    }

    fn zip_entries(archive: &Path) -> Vec<String> {
        let archive = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(archive_name("darwin", "arm64"), "darwin.arm64.adk-agent-extension.tar.gz");
        assert_eq!(archive_name("linux", "x64"), "linux.x64.adk-agent-extension.tar.gz");
        assert_eq!(archive_name("win32", "x64"), "win32.x64.adk-agent-extension.zip");
    }

    #[test]
    fn test_package_win32_is_zip() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("gemini-extension.json"), "{}").unwrap();
        std::fs::write(root.path().join("LICENSE"), "Apache-2.0").unwrap();
        std::fs::create_dir_all(root.path().join("commands/adk")).unwrap();
        std::fs::write(root.path().join("commands/adk/eval.toml"), "prompt = \"x\"").unwrap();
        let binary = root.path().join("adk-agent-extension.exe");
        std::fs::write(&binary, b"MZ").unwrap();

        let out = root.path().join("release");
        let archive = package(root.path(), &binary, "win32", "x64", &out).unwrap();

        assert_eq!(archive, out.join("win32.x64.adk-agent-extension.zip"));
        assert_eq!(
            zip_entries(&archive),
            vec![
                "LICENSE",
                "adk-agent-extension.exe",
                "commands/adk/eval.toml",
                "gemini-extension.json",
            ]
        );

        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let entry = zip.by_name("adk-agent-extension.exe").unwrap();
        assert_eq!(entry.compression(), zip::CompressionMethod::Deflated);
    }

    #[test]
    fn test_package_includes_present_files() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("gemini-extension.json"), "{}").unwrap();
        std::fs::write(root.path().join("GEMINI.md"), "# ADK").unwrap();
        std::fs::create_dir(root.path().join("commands")).unwrap();
        std::fs::write(root.path().join("commands/deploy.toml"), "prompt = \"x\"").unwrap();
        let binary = root.path().join("adk-agent-extension");
        std::fs::write(&binary, b"\x7fELF").unwrap();

        let out = root.path().join("release");
        let archive = package(root.path(), &binary, "linux", "x64", &out).unwrap();

        assert_eq!(archive, out.join("linux.x64.adk-agent-extension.tar.gz"));
        assert_eq!(
            file_entries(&archive),
            vec![
                "GEMINI.md",
                "adk-agent-extension",
                "commands/deploy.toml",
                "gemini-extension.json",
            ]
        );
    }

    #[test]
    fn test_package_missing_binary() {
        let root = tempfile::tempdir().unwrap();
        let err = package(root.path(), &root.path().join("nope"), "linux", "x64", root.path())
            .unwrap_err();
        assert!(err.to_string().starts_with("Extension binary not found"));
    }
}
