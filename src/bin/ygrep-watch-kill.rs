use std::io;

use ygrep_hooks::input::HookRequest;
use ygrep_hooks::session_end;

fn main() {
    let request = HookRequest::read_from(&mut io::stdin());
    let response = session_end::run(&request);
    #[allow(clippy::print_stdout)]
    {
        println!("{}", response.to_json());
    }
}
