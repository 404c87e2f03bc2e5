#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    spi::master::Spi,
    time::{Instant, Rate},
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info};
use static_cell::StaticCell;
use storybook_core::{
    app::{Reader, ReaderConfig, TickResult},
    content::STILL_CHOOSE_YOU,
};
use storybook_hal_esp32s3::{
    input::{
        Chain,
        edge_pads::{EdgePadConfig, EdgePads},
        rotary::{RotaryConfig, RotaryInput},
    },
    platform::{display::SharpDisplay, frame::FrameBuffer},
    render::{FrameRenderer, spread::SpreadRenderer},
};

const DISPLAY_SPI_HZ: u32 = 1_000_000;
const ENCODER_DIRECTION_INVERTED: bool = false;
const LOOP_INTERVAL_MS: u64 = 1;
const MIN_FRAME_INTERVAL_MS: u64 = 40;
// Serial VCOM only toggles on a write; keep the panel from holding DC bias.
const VCOM_REFRESH_MS: u64 = 1_000;

static FRAMES: StaticCell<[FrameBuffer; 2]> = StaticCell::new();

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: storybook starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Display wiring: CLK=GPIO13, DI=GPIO14, CS=GPIO15, DISP=GPIO2, EMD=GPIO9
    let disp = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let emd = Output::new(peripherals.GPIO9, Level::Low, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO15, Level::Low, OutputConfig::default());

    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(DISPLAY_SPI_HZ))
        // LS027B7DH01 uses CPOL=0, CPHA=1.
        .with_mode(esp_hal::spi::Mode::_1);

    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO13)
        .with_mosi(peripherals.GPIO14);

    let mut delay = Delay::new();

    let mut display = SharpDisplay::new(spi, disp, emd, cs);
    let mut display_fault_logged = false;
    esp_println::println!("display: init begin (CLK=13 DI=14 CS=15 DISP=2 EMD=9)");
    if let Err(err) = display.initialize(&mut delay) {
        esp_println::println!("display: initialize failed");
        info!("display initialize failed: {:?}", err);
        display_fault_logged = true;
    }
    if let Err(err) = display.clear_all(&mut delay) {
        esp_println::println!("display: clear failed");
        info!("display clear failed: {:?}", err);
        display_fault_logged = true;
    } else {
        esp_println::println!("display: clear ok");
    }

    // Encoder: CLK=GPIO10, DT=GPIO11, SW=GPIO12. Edge pads: LEFT=GPIO5, RIGHT=GPIO6
    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let encoder = RotaryInput::new(
        Input::new(peripherals.GPIO10, input_cfg),
        Input::new(peripherals.GPIO11, input_cfg),
        Input::new(peripherals.GPIO12, input_cfg),
        RotaryConfig::default()
            .with_direction_inverted(ENCODER_DIRECTION_INVERTED)
            .with_button_debounce_polls(4),
    )
    .unwrap();
    let pads = EdgePads::new(
        Input::new(peripherals.GPIO5, input_cfg),
        Input::new(peripherals.GPIO6, input_cfg),
        EdgePadConfig::default().with_debounce_polls(4),
    )
    .unwrap();

    let mut reader = Reader::new(
        STILL_CHOOSE_YOU,
        Chain::new(encoder, pads),
        ReaderConfig::default(),
    );
    let mut renderer = SpreadRenderer::new();

    // `shown` mirrors panel memory, which is blank after the clear above.
    let [frame, shown] = FRAMES.init_with(|| [FrameBuffer::new(), FrameBuffer::new()]);

    info!(
        "storybook: \"{}\" by {}, {} pages",
        STILL_CHOOSE_YOU.title,
        STILL_CHOOSE_YOU.byline,
        reader.page_count()
    );

    let loop_start = Instant::now();
    let mut render_pending = false;
    let mut last_render_ms = 0u64;
    let mut last_write_ms = 0u64;
    let mut first_flush_logged = false;

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        render_pending |= reader.tick(now_ms) == TickResult::RenderRequested;

        let frame_due = now_ms.saturating_sub(last_render_ms) >= MIN_FRAME_INTERVAL_MS;
        if render_pending && frame_due {
            render_pending = false;
            last_render_ms = now_ms;
            reader.with_screen(now_ms, |screen| renderer.render(screen, frame));

            if let Some(rows) = frame.changed_rows(shown) {
                match display.flush_rows(frame, rows, &mut delay) {
                    Ok(()) => {
                        shown.clone_from(frame);
                        last_write_ms = now_ms;
                        if !first_flush_logged {
                            esp_println::println!("display: first flush ok");
                            first_flush_logged = true;
                        }
                    }
                    Err(err) => {
                        if !display_fault_logged {
                            esp_println::println!("display: flush failed");
                            info!("display flush failed: {:?}", err);
                            display_fault_logged = true;
                        }
                    }
                }
            }
        }

        if now_ms.saturating_sub(last_write_ms) >= VCOM_REFRESH_MS {
            last_write_ms = now_ms;
            if let Err(err) = display.flush_rows(shown, 1..=1, &mut delay)
                && !display_fault_logged
            {
                info!("display vcom refresh failed: {:?}", err);
                display_fault_logged = true;
            }
        }

        Timer::after_millis(LOOP_INTERVAL_MS).await;
    }
}
