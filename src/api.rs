pub(super) mod adoptium;
pub(super) mod def;
pub(super) mod http_failure;
