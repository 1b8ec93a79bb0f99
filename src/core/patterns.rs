//! # Pattern Matching Module / 模式匹配模块
//!
//! Decides whether a file name is a fixture input and derives the name of its
//! expected-output file through regex substitution.
//!
//! 判断文件名是否为夹具输入，并通过正则替换推导出其预期输出文件名。

use anyhow::{Result, anyhow, bail};
use regex::Regex;
use std::fmt::Write;

use crate::infra::t;

/// Built-in rules, tried in this order; the first match wins.
/// 内置规则，按此顺序尝试；第一个匹配者胜出。
pub const DEFAULT_PATTERNS: [(&str, &str); 4] = [
    ("sample.in", "sample.out"),
    ("in.txt", "out.txt"),
    ("^in", "out"),
    (r"\.in$", ".out"),
];

/// One input-regex -> output-replacement rule.
/// 一条 输入正则 -> 输出替换 规则。
#[derive(Debug, Clone)]
pub struct Pattern {
    input: Regex,
    output: String,
}

impl Pattern {
    /// Compiles a rule.
    ///
    /// In `output`, `\N` and `\g<name>` (or `\g<N>`) refer to groups of `input`
    /// and `\\` is a single backslash. Everything else, `$` included, is
    /// literal text. Referring to a group `input` does not define is an error.
    ///
    /// 编译一条规则。在 `output` 中，`\N` 与 `\g<name>`（或 `\g<N>`）引用 `input`
    /// 中的分组，`\\` 表示单个反斜杠；其余内容（包括 `$`）均按字面处理。
    pub fn new(input: &str, output: &str) -> Result<Self> {
        let regex = Regex::new(input).map_err(|e| {
            anyhow!(
                "{}",
                t!("error.invalid_regex", pattern = input, error = e.to_string())
            )
        })?;
        let output = expand_template(output, &regex)?;
        Ok(Self {
            input: regex,
            output,
        })
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Searches anywhere in `file_name`; on a hit, returns the name with every
    /// matched span replaced and the rest left intact.
    pub fn apply(&self, file_name: &str) -> Option<String> {
        if !self.input.is_match(file_name) {
            return None;
        }
        Some(
            self.input
                .replace_all(file_name, self.output.as_str())
                .into_owned(),
        )
    }
}

/// Ordered collection of rules.
/// 有序的规则集合。
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Parses a single `IN:OUT` override. Anything other than exactly one `:`
    /// is rejected. The result replaces the default set entirely.
    ///
    /// 解析单个 `IN:OUT` 覆盖规则。除了恰好一个 `:` 之外的任何形式都会被拒绝。
    /// 结果会完全替换默认规则集。
    pub fn parse_override(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split(':').collect();
        let [input, output] = parts.as_slice() else {
            return Err(anyhow!("{}", t!("error.invalid_pattern", pattern = value)));
        };
        Ok(Self::new(vec![Pattern::new(input, output)?]))
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the first rule that matches `file_name` together with the derived
    /// output file name, or `None` when the file is not a fixture input.
    ///
    /// 返回第一个匹配 `file_name` 的规则及推导出的输出文件名；
    /// 如果文件不是夹具输入，则返回 `None`。
    pub fn match_file(&self, file_name: &str) -> Option<(&Pattern, String)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.apply(file_name).map(|out| (pattern, out)))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|(input, output)| {
                Pattern::new(input, output).expect("built-in pattern is a valid rule")
            })
            .collect();
        Self { patterns }
    }
}

/// Rewrites a user replacement into the regex crate's expansion syntax:
/// group references become `${..}` and a literal `$` becomes `$$`.
fn expand_template(template: &str, regex: &Regex) -> Result<String> {
    let mut expanded = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => expanded.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    let mut group = String::new();
                    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                        group.push(d);
                        chars.next();
                    }
                    push_group(&mut expanded, &group, template, regex)?;
                }
                Some('g') => {
                    chars.next();
                    if chars.next() != Some('<') {
                        bail!("{}", t!("error.bad_group_reference", template = template));
                    }
                    let mut group = String::new();
                    loop {
                        match chars.next() {
                            Some('>') => break,
                            Some(c) => group.push(c),
                            None => bail!(
                                "{}",
                                t!("error.bad_group_reference", template = template)
                            ),
                        }
                    }
                    push_group(&mut expanded, &group, template, regex)?;
                }
                Some('\\') => {
                    chars.next();
                    expanded.push('\\');
                }
                _ => expanded.push('\\'),
            },
            other => expanded.push(other),
        }
    }
    Ok(expanded)
}

fn push_group(expanded: &mut String, group: &str, template: &str, regex: &Regex) -> Result<()> {
    let known = match group.parse::<usize>() {
        Ok(index) => index < regex.captures_len(),
        Err(_) => regex.capture_names().flatten().any(|name| name == group),
    };
    if !known {
        bail!(
            "{}",
            t!("error.unknown_group", group = group, template = template)
        );
    }
    let _ = write!(expanded, "${{{group}}}");
    Ok(())
}
