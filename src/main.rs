use cubemaze::prelude::*;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut engine = Engine::new(&config).map_err(|e| e.to_string())?;
    let mut limiter = FrameLimiter::new(&window, config.frame_time_ms());
    let mut input = InputState::default();

    log::info!("arrows move, t/c/l toggle texture/color/lighting, esc quits");

    loop {
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(width, height) => {
                window.resize(width, height)?;
                engine.resize(width, height);
            }
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        engine.update(delta_ms as f32 / 1000.0, &input);
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}
