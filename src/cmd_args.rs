use std::ffi::OsString;
use std::str::FromStr;

pub use clap::Parser;

use crate::form::models::{HttpMethod, RequestDraft};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Request URL
    /// Optional. Prefills the URL field, or is printed with --print.
    #[clap(help = "request URL")]
    url: Option<String>,

    /// HTTP method
    /// One of GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS (case-insensitive).
    #[clap(
        short = 'X',
        long,
        default_value = "GET",
        value_parser = HttpMethod::from_str,
        help = "HTTP method"
    )]
    method: HttpMethod,

    /// Header lines
    /// May be repeated. Each value is one 'Name: Value' line.
    #[clap(short = 'H', long = "header", help = "header line, repeatable")]
    headers: Vec<String>,

    /// Request body
    /// Only emitted for POST, PUT and PATCH.
    #[clap(short = 'd', long = "data", help = "request body")]
    body: Option<String>,

    /// Print mode
    /// Print the command to stdout and exit instead of opening the form.
    #[clap(short = 'p', long, help = "print the command and exit")]
    print: bool,

    /// Copy mode
    /// With --print, also copy the command to the clipboard.
    #[clap(short = 'c', long, help = "copy the printed command", requires = "print")]
    copy: bool,

    /// Disable the system clipboard
    /// Copied commands stay in memory only.
    #[clap(long, help = "never touch the system clipboard")]
    no_clipboard: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    method: HttpMethod,
    url: String,
    headers: Vec<String>,
    body: String,
    print: bool,
    copy: bool,
    no_clipboard: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            method: args.method,
            url: args.url.unwrap_or_default(),
            headers: args.headers,
            body: args.body.unwrap_or_default(),
            print: args.print,
            copy: args.copy,
            no_clipboard: args.no_clipboard,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn print(&self) -> bool {
        self.print
    }

    pub fn copy(&self) -> bool {
        self.copy
    }

    pub fn no_clipboard(&self) -> bool {
        self.no_clipboard
    }

    /// Draft prefilled from the arguments. Repeated headers become one
    /// line each.
    pub fn to_draft(&self) -> RequestDraft {
        let mut draft = RequestDraft::new();
        draft.set_method(self.method);
        draft.set_url(self.url.clone());
        draft.set_headers_text(self.headers.join("\n"));
        draft.set_body_text(self.body.clone());
        draft
    }
}
