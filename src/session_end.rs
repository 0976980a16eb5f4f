use crate::input::HookRequest;
use crate::response::HookResponse;

/// SessionEnd hook: acknowledgement only. ygrep does not run a persistent
/// daemon per session (it auto-starts with an idle timeout), so there is
/// nothing to clean up here yet.
pub fn run(_request: &HookRequest) -> HookResponse {
    HookResponse::acknowledge()
}
