//! 読み込み済みブックのキャッシュ
//!
//! ファイルパスをキーに、変換済みの Workbook を保持する。
//! 対話操作のたびに再パースしないよう、以下の順で判定する:
//! 1. 更新日時・サイズが同じ → キャッシュをそのまま返す
//! 2. 内容の SHA-256 が同じ → 日時だけ更新して返す
//! 3. それ以外 → 読み直して置き換える

use super::load_workbook;
use crate::error::{DashError, Result};
use forensic_dash_common::Workbook;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// ファイルの更新スタンプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl FileStamp {
    fn read(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        Ok(Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

/// キャッシュエントリ
#[derive(Debug, Clone)]
struct CacheEntry {
    stamp: FileStamp,
    digest: String,
    workbook: Arc<Workbook>,
}

/// ブックキャッシュ（読み込み後は不変、Arc で共有）
#[derive(Debug, Default)]
pub struct WorkbookCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl WorkbookCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャッシュ経由でブックを取得
    pub fn get(&mut self, path: &Path) -> Result<Arc<Workbook>> {
        let key = cache_key(path);

        if !path.is_file() {
            // 消えたファイルのエントリは残さない
            self.entries.remove(&key);
            return load_workbook(path).map(Arc::new);
        }

        let stamp = FileStamp::read(path).map_err(|e| unreadable(path, e))?;

        let mut changed_digest = None;
        if let Some(entry) = self.entries.get_mut(&key) {
            if entry.stamp == stamp {
                tracing::debug!(path = %path.display(), "キャッシュヒット");
                return Ok(Arc::clone(&entry.workbook));
            }

            let digest = compute_content_digest(path);
            match digest {
                Ok(digest) if entry.digest == digest => {
                    tracing::debug!(path = %path.display(), "更新日時のみ変化、内容は同一");
                    entry.stamp = stamp;
                    return Ok(Arc::clone(&entry.workbook));
                }
                Ok(digest) => {
                    tracing::info!(path = %path.display(), "ファイルが変更されたため再読み込みします");
                    changed_digest = Some(digest);
                }
                Err(e) => {
                    self.entries.remove(&key);
                    return Err(unreadable(path, e));
                }
            }
        } else {
            tracing::debug!(path = %path.display(), "キャッシュミス");
        }

        let digest = match changed_digest {
            Some(digest) => digest,
            None => compute_content_digest(path).map_err(|e| unreadable(path, e))?,
        };
        let workbook = Arc::new(load_workbook(path)?);
        self.entries.insert(
            key,
            CacheEntry {
                stamp,
                digest,
                workbook: Arc::clone(&workbook),
            },
        );
        Ok(workbook)
    }

    /// 指定パスのエントリを破棄
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(&cache_key(path)).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(&cache_key(path))
    }

    /// キャッシュ件数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 正規化したパス（ファイルが消えていても親ディレクトリで正規化する）
/// 存在するが読めないファイルは読み込みエラーとして扱う
fn unreadable(path: &Path, err: DashError) -> DashError {
    match err {
        DashError::Io(e) => DashError::Load {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
        other => other,
    }
}

fn cache_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|p| p.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

/// ファイル内容の SHA-256（16進文字列）
pub fn compute_content_digest(path: &Path) -> Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
