//! Output directory and file naming.
//!
//! ```text
//! <output_root>/<scenario>/<slug(title)>/
//!   <stem>_info.json
//!   <stem>.png, <stem>_prompt.txt          single-image scenarios
//!   <stem>_完整.png                         merged course poster
//! ```
//!
//! `stem` is the sanitized title. Course panels are written transiently as
//! `<stem>_part1` / `<stem>_part2` before being merged.

use crate::request::Scenario;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Characters that are not allowed in file names on common filesystems.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid filename regex"));

/// Anything that is not a word character, whitespace, or hyphen.
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug regex"));

/// Runs of whitespace and hyphens.
static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid separator regex"));

const MAX_STEM_CHARS: usize = 100;
const MAX_SLUG_CHARS: usize = 50;

/// Suffix of the merged course poster.
pub const MERGED_SUFFIX: &str = "_完整";

/// Replace filesystem-unsafe characters with `_` and cap the length.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS
        .replace_all(name, "_")
        .chars()
        .take(MAX_STEM_CHARS)
        .collect()
}

/// Lowercase, hyphen-separated directory name for a title.
///
/// Word characters are Unicode-aware, so CJK titles keep their characters.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = SLUG_SEPARATORS.replace_all(&cleaned, "-");
    hyphenated
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_CHARS)
        .collect()
}

/// Resolved output location for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    stem: String,
}

impl OutputLayout {
    /// Derive the layout for a title.
    ///
    /// With an explicit `override_dir` files go straight into it; otherwise
    /// into `<root>/<scenario>/<slug(title)>/`.
    pub fn new(root: &Path, override_dir: Option<&Path>, scenario: Scenario, title: &str) -> Self {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => root.join(scenario.as_str()).join(slugify(title)),
        };
        Self {
            dir,
            stem: sanitize_filename(title),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Serialized request record.
    pub fn info_path(&self) -> PathBuf {
        self.dir.join(format!("{}_info.json", self.stem))
    }

    /// Artifact name for the single-image scenarios.
    pub fn single_name(&self) -> String {
        self.stem.clone()
    }

    /// Artifact name for course panel `index` (1-based).
    pub fn panel_name(&self, index: usize) -> String {
        format!("{}_part{}", self.stem, index)
    }

    pub fn merged_path(&self) -> PathBuf {
        self.image_path(&format!("{}{}", self.stem, MERGED_SUFFIX))
    }

    pub fn image_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }

    pub fn prompt_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}_prompt.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_unsafe_chars() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("AI实战营"), "AI实战营");
    }

    #[test]
    fn test_sanitize_caps_length_in_chars() {
        let long = "营".repeat(150);
        assert_eq!(sanitize_filename(&long).chars().count(), 100);
    }

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust -- 2024  "), "rust-2024");
        assert_eq!(slugify("a_b"), "a_b");
    }

    #[test]
    fn test_slugify_keeps_cjk_word_chars() {
        assert_eq!(slugify("AI实战营"), "ai实战营");
        assert_eq!(slugify("转型AI产品经理：Agent 实战课！"), "转型ai产品经理agent-实战课");
    }

    #[test]
    fn test_slugify_caps_length() {
        let long = "a".repeat(80);
        assert_eq!(slugify(&long).len(), 50);
    }

    #[test]
    fn test_default_layout_paths() {
        let layout = OutputLayout::new(
            Path::new("/home/u/Posters"),
            None,
            Scenario::Course,
            "AI实战营",
        );

        assert_eq!(layout.dir(), Path::new("/home/u/Posters/course/ai实战营"));
        assert_eq!(
            layout.info_path(),
            PathBuf::from("/home/u/Posters/course/ai实战营/AI实战营_info.json")
        );
        assert_eq!(
            layout.merged_path(),
            PathBuf::from("/home/u/Posters/course/ai实战营/AI实战营_完整.png")
        );
        assert_eq!(layout.panel_name(2), "AI实战营_part2");
        assert_eq!(
            layout.prompt_path(&layout.panel_name(1)),
            PathBuf::from("/home/u/Posters/course/ai实战营/AI实战营_part1_prompt.txt")
        );
    }

    #[test]
    fn test_override_dir_is_used_verbatim() {
        let layout = OutputLayout::new(
            Path::new("/home/u/Posters"),
            Some(Path::new("/tmp/out")),
            Scenario::Event,
            "Launch: v2",
        );

        assert_eq!(layout.dir(), Path::new("/tmp/out"));
        assert_eq!(layout.stem(), "Launch_ v2");
        assert_eq!(layout.image_path(&layout.single_name()), PathBuf::from("/tmp/out/Launch_ v2.png"));
    }
}
