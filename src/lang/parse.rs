use super::ast::*;
use super::lex::lex;
use super::token::Word;
use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Parse one upper-cased statement.
pub fn parse(s: &str) -> Result<Statement> {
    let (word, keyword, args) = lex(s);
    let word = match word {
        Some(word) => word,
        None if keyword.is_empty() => return Err(error!(SyntaxError)),
        None => return BasicParser::assignment(s.trim()),
    };
    use Word::*;
    match word {
        Beep => BasicParser::bare(args, Statement::Beep),
        Circle => {
            let v = BasicParser::integers(args, 3)?;
            Ok(Statement::Circle(v[0], v[1], v[2]))
        }
        Cls => BasicParser::bare(args, Statement::Cls),
        Cont => BasicParser::bare(args, Statement::Cont),
        Data => Ok(Statement::Data(
            args.split(',').map(|s| s.trim().to_string()).collect(),
        )),
        Dim => BasicParser::dim(args),
        End => BasicParser::bare(args, Statement::End),
        Exit => BasicParser::bare(args, Statement::Exit),
        For => BasicParser::for_to(args),
        Gosub => Ok(Statement::Gosub(BasicParser::line_number(args)?)),
        Goto => Ok(Statement::Goto(BasicParser::line_number(args)?)),
        Help => BasicParser::bare(args, Statement::Help),
        If => BasicParser::if_then(args),
        Input => Ok(Statement::Input(BasicParser::variable(args)?)),
        Let => BasicParser::assignment(args),
        Line => {
            let v = BasicParser::integers(args, 4)?;
            Ok(Statement::Line(v[0], v[1], v[2], v[3]))
        }
        List => BasicParser::bare(args, Statement::List),
        Load => Ok(Statement::Load(BasicParser::filename(args)?)),
        New => BasicParser::bare(args, Statement::New),
        Next => BasicParser::next(args),
        Play => match quoted(args).unwrap_or(args).trim() {
            "" => Err(error!(SyntaxError)),
            notes => Ok(Statement::Play(notes.to_string())),
        },
        Print => Ok(Statement::Print(BasicParser::printable(args))),
        Read => Ok(Statement::Read(BasicParser::variable(args)?)),
        Rem => Ok(Statement::Rem),
        Restore => BasicParser::bare(args, Statement::Restore),
        Return => BasicParser::bare(args, Statement::Return),
        Rnd => match args.parse::<i64>() {
            Ok(n) if n >= 1 => Ok(Statement::Rnd(n)),
            _ => Err(error!(SyntaxError)),
        },
        Run => BasicParser::bare(args, Statement::Run),
        Save => Ok(Statement::Save(BasicParser::filename(args)?)),
        Stop => BasicParser::bare(args, Statement::Stop),
        Troff => BasicParser::bare(args, Statement::Troff),
        Tron => BasicParser::bare(args, Statement::Tron),
        Ver => BasicParser::bare(args, Statement::Ver),
    }
}

/// Literal numbers only; `INF` and `NAN` are not BASIC numbers.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if !s.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '+' || c == '-') {
        return None;
    }
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

fn quoted(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('"')?;
    match rest.find('"') {
        Some(end) => Some(&rest[..end]),
        None => Some(rest),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

struct BasicParser {}

impl BasicParser {
    fn bare(args: &str, statement: Statement) -> Result<Statement> {
        if args.is_empty() {
            Ok(statement)
        } else {
            Err(error!(SyntaxError))
        }
    }

    fn number(s: &str) -> Result<f64> {
        parse_number(s).ok_or_else(|| error!(SyntaxError))
    }

    fn line_number(s: &str) -> Result<LineNumber> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(error!(SyntaxError));
        }
        match s.parse::<LineNumber>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(error!(SyntaxError)),
        }
    }

    fn numeric_name(s: &str) -> Result<String> {
        let s = s.trim();
        if is_identifier(s) {
            Ok(s.to_string())
        } else {
            Err(error!(SyntaxError))
        }
    }

    fn integers(args: &str, count: usize) -> Result<Vec<i32>> {
        let v = args
            .split(',')
            .map(|s| s.trim().parse::<i32>().map_err(|_| error!(SyntaxError)))
            .collect::<Result<Vec<i32>>>()?;
        if v.len() != count {
            return Err(error!(SyntaxError));
        }
        Ok(v)
    }

    fn filename(args: &str) -> Result<String> {
        match quoted(args).unwrap_or(args).trim() {
            "" => Err(error!(SyntaxError)),
            name => Ok(name.to_string()),
        }
    }

    fn index(s: &str) -> Result<Index> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Index::Literal(n));
        }
        Ok(Index::Variable(BasicParser::numeric_name(s)?))
    }

    fn variable(s: &str) -> Result<Variable> {
        let s = s.trim();
        if let Some(open) = s.find('(') {
            let name = BasicParser::numeric_name(&s[..open])?;
            let inner = s[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| error!(SyntaxError))?;
            let indices = inner
                .split(',')
                .map(BasicParser::index)
                .collect::<Result<Vec<Index>>>()?;
            if indices.len() > 3 {
                return Err(error!(SyntaxError));
            }
            return Ok(Variable::Element(name, indices));
        }
        match s.strip_suffix('$') {
            Some(name) if is_identifier(name) => Ok(Variable::String(s.to_string())),
            Some(_) => Err(error!(SyntaxError)),
            None => Ok(Variable::Numeric(BasicParser::numeric_name(s)?)),
        }
    }

    fn assignment(args: &str) -> Result<Statement> {
        let (lhs, rhs) = args.split_once('=').ok_or_else(|| error!(SyntaxError))?;
        let var = BasicParser::variable(lhs)?;
        let value = if var.is_string() {
            let s = quoted(rhs.trim()).ok_or_else(|| error!(SyntaxError))?;
            Value::String(s.to_string())
        } else {
            Value::Number(BasicParser::number(rhs)?)
        };
        Ok(Statement::Let(var, value))
    }

    fn dim(args: &str) -> Result<Statement> {
        match BasicParser::variable(args)? {
            Variable::Element(name, indices) => {
                let mut dims = vec![];
                for index in indices {
                    match index {
                        Index::Literal(n) if n > 0 => dims.push(n as usize),
                        _ => return Err(error!(SyntaxError)),
                    }
                }
                Ok(Statement::Dim(name, dims))
            }
            _ => Err(error!(SyntaxError)),
        }
    }

    fn for_to(args: &str) -> Result<Statement> {
        let (var, rest) = args.split_once('=').ok_or_else(|| error!(SyntaxError))?;
        let var = BasicParser::numeric_name(var)?;
        let to = rest.find("TO").ok_or_else(|| error!(SyntaxError))?;
        let start = BasicParser::number(&rest[..to])?;
        let rest = &rest[to + 2..];
        let (end, step) = match rest.find("STEP") {
            Some(pos) => (
                BasicParser::number(&rest[..pos])?,
                BasicParser::number(&rest[pos + 4..])?,
            ),
            None => (BasicParser::number(rest)?, 1.0),
        };
        Ok(Statement::For(var, start, end, step))
    }

    fn if_then(args: &str) -> Result<Statement> {
        let then = args.find("THEN").ok_or_else(|| error!(SyntaxError))?;
        let (var, value) = args[..then]
            .split_once('=')
            .ok_or_else(|| error!(SyntaxError))?;
        let var = BasicParser::numeric_name(var)?;
        let value = BasicParser::number(value)?;
        let rest = args[then + 4..].trim();
        if rest.is_empty() {
            return Err(error!(SyntaxError));
        }
        let rest = if rest.chars().all(|c| c.is_ascii_digit()) {
            format!("GOTO {}", rest)
        } else {
            rest.to_string()
        };
        Ok(Statement::If(var, value, rest))
    }

    fn next(args: &str) -> Result<Statement> {
        if args.is_empty() {
            Ok(Statement::Next(None))
        } else {
            Ok(Statement::Next(Some(BasicParser::numeric_name(args)?)))
        }
    }

    fn printable(args: &str) -> Printable {
        if args.is_empty() {
            return Printable::Blank;
        }
        if let Some(s) = quoted(args) {
            return Printable::Literal(s.to_string());
        }
        match BasicParser::variable(args) {
            Ok(var) => Printable::Variable(var),
            Err(_) => Printable::Echo(args.to_string()),
        }
    }
}
