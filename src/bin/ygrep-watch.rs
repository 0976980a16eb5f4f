use std::io;

use ygrep_hooks::input::HookRequest;
use ygrep_hooks::session_start;

fn main() {
    let request = HookRequest::read_from(&mut io::stdin());
    let response = session_start::run(&request);
    #[allow(clippy::print_stdout)]
    {
        println!("{}", response.to_json());
    }
}
