/// Returns `true` if the HTTP status code is in the 2xx success class.
///
/// # Examples
///
/// ```
/// use randorg_fetch::is_success;
///
/// assert!(is_success(200));
/// assert!(!is_success(301));
/// assert!(!is_success(503));
/// ```
pub fn is_success(status: u16) -> bool { (200..300).contains(&status) }
