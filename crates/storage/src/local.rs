//! Local directory object store
//!
//! Maps `bucket/key` onto `<root>/<bucket>/<key>`. Used by the local harness
//! to inspect what would have been uploaded. Each object is written to a
//! sibling temp file and renamed into place, so a reader never sees a
//! partially written object.
//!
//! Keys with empty, `.` or `..` segments are rejected: on a filesystem they
//! would escape or alias the bucket directory.

use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use crate::{ObjectStore, PutObject, StoreError};

/// Object store rooted at a local directory
#[derive(Debug, Clone)]
pub struct LocalDirStore {
    root: PathBuf,
}

impl LocalDirStore {
    /// Store objects under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path of an object.
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        let mut path = self.root.clone();
        for segment in std::iter::once(bucket).chain(key.split('/')) {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StoreError::InvalidKey {
                    key: format!("{}/{}", bucket, key),
                    reason: "empty, '.' or '..' path segment",
                });
            }
            path.push(segment);
        }
        Ok(path)
    }

    fn put_sync(&self, object: PutObject) -> Result<(), StoreError> {
        let path = self.object_path(&object.bucket, object.key.as_str())?;
        let io_err = |path: &Path| {
            let path = path.display().to_string();
            move |source| StoreError::Io { path, source }
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let mut tmp = path.clone().into_os_string();
        tmp.push(".partial");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &object.body).map_err(io_err(&tmp))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(&path)(e));
        }

        tracing::debug!(
            target: "zoolanding::store",
            path = %path.display(),
            size = object.body.len(),
            "Wrote object to local directory"
        );
        Ok(())
    }
}

impl ObjectStore for LocalDirStore {
    fn put_object(
        &self,
        object: PutObject,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        std::future::ready(self.put_sync(object))
    }
}
