use thiserror::Error;

use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum Error {
    #[error("template \"{0}\" does not exist")]
    TemplateDoesNotExist(PathBuf),

    #[error("template \"{0}\" is not valid UTF-8")]
    NotUtf8(PathBuf),
}
