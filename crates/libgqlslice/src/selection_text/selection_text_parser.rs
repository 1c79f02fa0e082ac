use crate::selection_text::NodeId;
use crate::selection_text::ObjectRegistry;

/// Outcome of [`SelectionTextParser::parse_object()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParsedObject {
    /// Index of the last line that belonged to the block. When the input
    /// ran out first this is the input length instead, so a caller resuming
    /// at `offset + consumed + 1` never reads a line twice.
    pub consumed: usize,
    pub node: NodeId,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseState {
    ReadingArgs,
    ReadingBody,
    ReadingName,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LineKind {
    /// `) {`
    ArgsClose,
    /// A lone `)`.
    ArgsEnd,
    /// More `(` than `)`, as in `job_job(`.
    ArgsHeader,
    /// Ends in `{`.
    BlockHeader,
    /// `}`
    Close,
    Field,
}
impl LineKind {
    fn classify(line: &str) -> Self {
        if line == "}" {
            return Self::Close;
        }
        if let Some(rest) = line.trim_start_matches(['}', ' ', '\t']).strip_prefix(')') {
            match rest.trim() {
                "" => return Self::ArgsEnd,
                "{" => return Self::ArgsClose,
                _ => (),
            }
        }
        if line.matches('(').count() > line.matches(')').count() {
            Self::ArgsHeader
        } else if line.ends_with('{') {
            Self::BlockHeader
        } else {
            Self::Field
        }
    }
}

/// The name a selection line refers to.
///
/// This is the text before any `(` or `{`, minus an `alias:` prefix. For an
/// inline fragment (`... on T {`) it is the type condition `T`.
pub fn selection_name(line: &str) -> &str {
    let head = line.split(['(', '{']).next().unwrap_or_default().trim();
    if let Some(spread) = head.strip_prefix("...") {
        let mut tokens = spread.split_whitespace();
        return match tokens.next() {
            Some("on") => tokens.next().unwrap_or_default(),
            Some(name) => name,
            None => "",
        };
    }
    let head = match head.rsplit_once(':') {
        Some((_alias, name)) => name,
        None => head,
    };
    head.split_whitespace().next().unwrap_or_default()
}

/// Reads selection blocks out of pre-trimmed lines into an
/// [`ObjectRegistry`].
#[derive(Debug)]
pub struct SelectionTextParser<'r> {
    registry: &'r mut ObjectRegistry,
}
impl<'r> SelectionTextParser<'r> {
    pub fn new(registry: &'r mut ObjectRegistry) -> Self {
        Self {
            registry,
        }
    }

    /// Parse consecutive sibling blocks until `lines` runs out, returning
    /// each distinct top-level node once. Stray closing lines between
    /// blocks are skipped.
    pub fn parse_all<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<NodeId> {
        let mut roots = vec![];
        let mut offset = 0;
        while offset < lines.len() {
            let line = lines[offset].as_ref().trim();
            if matches!(
                LineKind::classify(line),
                LineKind::ArgsClose | LineKind::ArgsEnd | LineKind::Close,
            ) {
                log::trace!("Skipping stray `{line}` between blocks.");
                offset += 1;
                continue;
            }

            let parsed = self.parse_object(&lines[offset..]);
            if !roots.contains(&parsed.node) {
                roots.push(parsed.node);
            }
            offset += parsed.consumed + 1;
        }
        roots
    }

    /// Parse the block whose header is `lines[0]`.
    ///
    /// A first line that is not a header starts an anonymous block and is
    /// then read as part of its body.
    pub fn parse_object<S: AsRef<str>>(&mut self, lines: &[S]) -> ParsedObject {
        let mut node: Option<NodeId> = None;
        let mut state = ParseState::ReadingName;
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor].as_ref().trim();
            let kind = LineKind::classify(line);
            match state {
                ParseState::ReadingName => match kind {
                    LineKind::ArgsHeader => {
                        node = Some(self.resolve_header(line));
                        state = ParseState::ReadingArgs;
                    },
                    LineKind::BlockHeader => {
                        node = Some(self.resolve_header(line));
                        state = ParseState::ReadingBody;
                    },
                    _ => {
                        node = Some(self.registry.allocate_anonymous());
                        state = ParseState::ReadingBody;
                        continue;
                    },
                },

                ParseState::ReadingArgs => match kind {
                    LineKind::ArgsClose => state = ParseState::ReadingBody,
                    LineKind::ArgsEnd => return ParsedObject {
                        consumed: cursor,
                        node: self.current(&mut node),
                    },
                    _ => (),
                },

                ParseState::ReadingBody => {
                    let parent = self.current(&mut node);
                    match kind {
                        LineKind::Close => return ParsedObject {
                            consumed: cursor,
                            node: parent,
                        },

                        LineKind::ArgsHeader | LineKind::BlockHeader => {
                            let field_name = selection_name(line);
                            if !field_name.is_empty() {
                                self.registry.node_mut(parent).record_field(field_name, true);
                            }
                            let child = self.parse_object(&lines[cursor..]);
                            self.registry.node_mut(parent).add_child(child.node);
                            cursor += child.consumed + 1;
                            continue;
                        },

                        LineKind::ArgsClose | LineKind::ArgsEnd =>
                            log::trace!("Ignoring stray `{line}` inside a block body."),

                        LineKind::Field => {
                            let field_name = selection_name(line);
                            if !field_name.is_empty() {
                                self.registry.node_mut(parent).record_field(field_name, false);
                            }
                        },
                    }
                },
            }
            cursor += 1;
        }

        ParsedObject {
            consumed: cursor,
            node: self.current(&mut node),
        }
    }

    fn current(&mut self, node: &mut Option<NodeId>) -> NodeId {
        *node.get_or_insert_with(|| self.registry.allocate_anonymous())
    }

    fn resolve_header(&mut self, line: &str) -> NodeId {
        match selection_name(line) {
            "" => self.registry.allocate_anonymous(),
            name => self.registry.resolve(name),
        }
    }
}
