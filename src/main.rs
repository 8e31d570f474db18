fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the plot tool application
    plot_tool::run_app()
}
