use std::path::{Path, PathBuf};

use crate::GlyphSheetError;

/// Artifact paths derived from a font file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputNames {
    basename: String,
    out_dir: PathBuf,
}

impl OutputNames {
    /// Only the final extension is stripped: `my.font.ttf` becomes `my.font`.
    pub fn from_font_path<P, D>(font_path: P, out_dir: D) -> Result<Self, GlyphSheetError>
    where
        P: AsRef<Path>,
        D: Into<PathBuf>,
    {
        let font_path = font_path.as_ref();
        let basename = font_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| GlyphSheetError::InvalidFontPath(font_path.to_path_buf()))?;

        Ok(Self { basename, out_dir: out_dir.into() })
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn bin_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.bin", self.basename))
    }

    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.png", self.basename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basename(path: &str) -> String {
        OutputNames::from_font_path(path, ".").unwrap().basename().to_owned()
    }

    #[test]
    fn strips_directory_and_extension() {
        assert_eq!(basename("/usr/share/fonts/DejaVuSansMono.ttf"), "DejaVuSansMono");
        assert_eq!(basename("fonts/terminus.otf"), "terminus");
    }

    #[test]
    fn keeps_inner_dots() {
        assert_eq!(basename("my.font.ttf"), "my.font");
        assert_eq!(basename("dir/v1.2.3.ttf"), "v1.2.3");
    }

    #[test]
    fn extensionless_and_hidden_files() {
        assert_eq!(basename("fonts/plain"), "plain");
        assert_eq!(basename(".hidden"), ".hidden");
    }

    #[test]
    fn rejects_paths_without_file_name() {
        assert!(matches!(
            OutputNames::from_font_path("/", "."),
            Err(GlyphSheetError::InvalidFontPath(_))
        ));
        assert!(OutputNames::from_font_path("fonts/..", ".").is_err());
    }

    #[test]
    fn artifacts_go_to_output_directory() {
        let names = OutputNames::from_font_path("a/b/mono.ttf", "out").unwrap();
        assert_eq!(names.bin_path(), Path::new("out").join("mono.bin"));
        assert_eq!(names.png_path(), Path::new("out").join("mono.png"));
    }
}
