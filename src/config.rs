//! Configuration for the emoji hub.
//!
//! The command table is a declarative document: each entry maps a command
//! keyword to a text file listing candidate image URLs, one per line. The
//! table can be loaded from the `[emojihub]` section of a TOML file or taken
//! from the builtin set.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;

/// One configured command: the keyword users type and the file its
/// candidate image URLs are drawn from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmojiEntry {
    pub command: String,
    pub source: PathBuf,
}

/// How "repeat the last command" memory groups messages into a conversation.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionScope {
    /// One memory slot per user.
    #[default]
    User,
    /// One slot per channel; direct messages fall back to the user id.
    Channel,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmojiHubConfig {
    #[serde(default)]
    pub emojis: Vec<EmojiEntry>,

    #[serde(default)]
    pub session_scope: SessionScope,
}

impl EmojiHubConfig {
    /// Configuration section prefix (TOML section name).
    pub const PREFIX: &'static str = "emojihub";

    /// Parse the `[emojihub]` section of a TOML document.
    ///
    /// A document without the section yields the default (empty) config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let data: toml::Value = toml::from_str(content)?;

        let section = data
            .get(Self::PREFIX)
            .cloned()
            .unwrap_or(toml::Value::Table(Default::default()));

        let config: Self = section.try_into()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading emoji hub configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// The builtin command table: the packs the add-on ships with.
    pub fn builtin() -> Self {
        let emojis = BUILTIN_PACKS
            .iter()
            .map(|(command, file)| EmojiEntry {
                command: (*command).to_string(),
                source: PathBuf::from(format!("{BUILTIN_SOURCE_DIR}/{file}")),
            })
            .collect();

        Self {
            emojis,
            session_scope: SessionScope::default(),
        }
    }
}

/// Directory the builtin pack files live under, relative to the host's
/// working directory.
pub const BUILTIN_SOURCE_DIR: &str = "data/emojihub/txts";

/// Builtin packs: command keyword and source file name.
const BUILTIN_PACKS: &[(&str, &str)] = &[
    ("0721", "0721.txt"),
    ("2233", "2233娘小剧场.txt"),
    ("acomu414", "acomu414.txt"),
    ("ba", "ba.txt"),
    ("capoo", "capoo.txt"),
    ("chiikawa", "chiikawa.txt"),
    ("doro", "doro.txt"),
    ("downvote", "Downvote.txt"),
    ("eveonecat", "eveonecat.txt"),
    ("fufu", "fufu.txt"),
    ("gbc", "GirlsBandCry.txt"),
    ("kemomimi", "kemomimi酱表情包.txt"),
    ("koimeme", "koimeme.txt"),
    ("mygo", "mygo.txt"),
    ("seseren", "seseren.txt"),
    ("亚托莉", "亚托莉表情包.txt"),
    ("初音未来", "初音未来Q.txt"),
    ("卡拉彼丘", "卡拉彼丘.txt"),
    ("孤独摇滚", "孤独摇滚.txt"),
    ("宇佐紀", "宇佐紀.txt"),
    ("小黑子", "小黑子.txt"),
    ("心海", "心海.txt"),
    ("柴郡", "柴郡.txt"),
    ("永雏小菲", "永雏小菲.txt"),
    ("流萤", "流萤.txt"),
    ("滑稽", "滑稽.txt"),
    ("狗妈", "狗妈.txt"),
    ("玛丽猫", "玛丽猫.txt"),
    ("瑟莉亚", "瑟莉亚.txt"),
    ("甘城猫猫", "甘城猫猫.txt"),
    ("男娘武器库", "男娘武器库.txt"),
    ("疾旋鼬", "疾旋鼬.txt"),
    ("白圣女", "白圣女.txt"),
    ("白圣女黑白", "白圣女黑白.txt"),
    ("绪山真寻", "绪山真寻.txt"),
    ("藤田琴音", "藤田琴音.txt"),
    ("蜜汁工坊", "蜜汁工坊.txt"),
    ("败犬女主", "败犬女主.txt"),
    ("赛马娘", "赛马娘.txt"),
    ("阿夸", "阿夸.txt"),
    ("阿尼亚", "阿尼亚.txt"),
    ("鹿乃子", "鹿乃子.txt"),
    ("龙图", "龙图.txt"),
];
