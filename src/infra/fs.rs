//! # File System Operations Module / 文件系统操作模块
//!
//! Flat directory listing and the small file helpers the fixture visitors need.
//!
//! 扁平目录列举以及夹具访问器所需的小型文件辅助函数。

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Lists the regular files directly inside `dir`, in directory-listing order.
/// Subdirectories are skipped (no recursion), symlinks are followed, and names
/// that are not valid UTF-8 are ignored.
///
/// # Returns
/// `(file name, full path)` tuples.
///
/// 列出 `dir` 下直接包含的普通文件，保持目录列举顺序。
/// 跳过子目录（不递归），跟随符号链接，忽略非 UTF-8 的文件名。
pub fn list_regular_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| t!("error.read_dir_failed", path = dir.display()).to_string())?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| t!("error.read_dir_failed", path = dir.display()).to_string())?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push((name.to_string(), path));
        }
    }
    Ok(files)
}

/// Removes `path`, treating a missing file as success.
/// 删除 `path`，文件不存在时视为成功。
pub async fn remove_if_exists(path: &Path) -> io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
