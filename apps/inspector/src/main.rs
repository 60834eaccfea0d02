fn main() {
    if let Err(error) = uiscope_inspector::run() {
        // The subscriber is installed inside run() once arguments are parsed.
        tracing::error!("{error:#}");
        std::process::exit(1);
    }
}
