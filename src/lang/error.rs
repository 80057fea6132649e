pub struct Error {
    code: u16,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message: message.to_string(),
        }
    }

    /// Classify an I/O failure that happened while reading `filename`.
    pub fn from_io(error: &std::io::Error, filename: &str) -> Error {
        let msg = format!("{}: {}", filename, error);
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; &msg),
            _ => error!(IoError; &msg),
        }
    }
}

pub enum ErrorCode {
    FileNotFound = 53,
    IoError = 57,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "I/O ERROR",
            _ => "",
        };
        if code_str.is_empty() {
            if self.message.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {}; {}", self.code, self.message)
            }
        } else if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}
