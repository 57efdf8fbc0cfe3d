//! The embedded English message table.
//!
//! One `key<TAB>text` pair per line, with blank lines between groups for
//! readability. Placeholder tokens (`$1`, `$2`, ...) are substituted by the
//! consuming extension at runtime and pass through this tool untouched.
//!
//! The table is authored here, at build time. A malformed line is a defect in
//! this file, not bad user input; `MessageCatalog::parse` rejects it loudly.

pub const MESSAGES: &str = "
add_error_auth	Blast! Time to update your hunting license.
add_error_ajax	Server is playin' hard to get. Try hunting later.
add_error_url	Or not. Your URL blows.
add_error_default	You missed!
add_already	You added this link $1.
add_slow	Waiting for $1…

config_auth_check	Inspecting your hunting license…
config_auth_success	Rounding up your links…
config_auth_fail	Oof! $1 rejected that username/password.

sync_error_connect	Server is playin' hard to get. Try hunting later.
sync_error_auth	Oof! Seems your username/password need some updating.
sync_error_toomany	Seems like you're updatin' too fast for the server!
sync_error_default	Well shucks. Something's busted for serious. ($1)
";
