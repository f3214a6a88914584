use crate::error::{QrStudioError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

fn image_info(path: &Path) -> Option<ImageInfo> {
    let ext = path.extension()?.to_string_lossy();
    if !is_image_extension(&ext) {
        return None;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Some(ImageInfo {
        path: path.to_path_buf(),
        file_name,
    })
}

/// フォルダ内の画像を列挙（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(QrStudioError::FileNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| image_info(e.path()))
        .collect();

    images.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(folder = %folder.display(), count = images.len(), "scanned folder");

    Ok(images)
}

/// 引数のファイル/フォルダをまとめて画像リストにする
///
/// 明示的に指定されたファイルは拡張子に関係なく対象にする。
pub fn collect_images(paths: &[PathBuf], recursive: bool) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            images.extend(scan_folder(path, recursive)?);
        } else if path.is_file() {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            images.push(ImageInfo {
                path: path.clone(),
                file_name,
            });
        } else {
            return Err(QrStudioError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("png"));
        assert!(is_image_extension("PNG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("webp"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("svg"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(QrStudioError::FileNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("c.png")).unwrap();
        File::create(dir.path().join("a.JPG")).unwrap();
        File::create(dir.path().join("b.gif")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let result = scan_folder(dir.path(), false).unwrap();
        let names: Vec<_> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.JPG", "b.gif", "c.png"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        File::create(dir.path().join("top.png")).unwrap();
        File::create(sub.join("nested.png")).unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_images_mixed() {
        let dir = tempdir().unwrap();
        let single = dir.path().join("scan.dat");
        File::create(&single).unwrap();
        let folder = dir.path().join("folder");
        fs::create_dir_all(&folder).unwrap();
        File::create(folder.join("one.png")).unwrap();

        let result = collect_images(&[single.clone(), folder], false).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].path, single);
    }

    #[test]
    fn test_collect_images_missing_path() {
        let result = collect_images(&[PathBuf::from("/nonexistent/qr.png")], false);
        assert!(matches!(result, Err(QrStudioError::FileNotFound(_))));
    }
}
