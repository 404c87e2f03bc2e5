use core::ops::RangeInclusive;

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
use log::debug;

use super::frame::{self, FrameBuffer, HEIGHT, ROW_BYTES};

const CS_SETUP_NS: u32 = 3_000;
const CS_HOLD_NS: u32 = 1_000;
const CLEAR_HOLD_NS: u32 = 220_000;
const POWER_UP_US: u32 = 60;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayError<SpiErr, DispErr, EmdErr, CsErr> {
    Spi(SpiErr),
    Disp(DispErr),
    Emd(EmdErr),
    Cs(CsErr),
    /// Row outside `1..=240`.
    RowOutOfRange(u16),
}

pub type SharpDisplayResult<SpiErr, DispErr, EmdErr, CsErr> =
    Result<(), DisplayError<SpiErr, DispErr, EmdErr, CsErr>>;

/// Board adapter for the LS027B7DH01 on a bare SPI bus with a manual,
/// active-high chip select.
#[derive(Debug)]
pub struct SharpDisplay<SPI, DISP, EMD, CS> {
    spi: SPI,
    disp: DISP,
    emd: EMD,
    cs: CS,
    vcom_high: bool,
}

impl<SPI, DISP, EMD, CS> SharpDisplay<SPI, DISP, EMD, CS>
where
    SPI: SpiBus<u8>,
    DISP: OutputPin,
    EMD: OutputPin,
    CS: OutputPin,
{
    pub fn new(spi: SPI, disp: DISP, emd: EMD, cs: CS) -> Self {
        Self {
            spi,
            disp,
            emd,
            cs,
            vcom_high: false,
        }
    }

    pub fn release(self) -> (SPI, DISP, EMD, CS) {
        (self.spi, self.disp, self.emd, self.cs)
    }

    /// Puts the panel in serial VCOM mode and enables display output.
    pub fn initialize<D>(
        &mut self,
        delay: &mut D,
    ) -> SharpDisplayResult<SPI::Error, DISP::Error, EMD::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.disp.set_high().map_err(DisplayError::Disp)?;
        self.emd.set_low().map_err(DisplayError::Emd)?;
        self.cs.set_low().map_err(DisplayError::Cs)?;

        delay.delay_us(POWER_UP_US);
        Ok(())
    }

    /// Blanks the panel memory.
    pub fn clear_all<D>(
        &mut self,
        delay: &mut D,
    ) -> SharpDisplayResult<SPI::Error, DISP::Error, EMD::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.vcom_high = !self.vcom_high;

        self.cs.set_high().map_err(DisplayError::Cs)?;
        delay.delay_ns(CS_SETUP_NS);

        let packet = frame::clear_packet(self.vcom_high);
        self.spi.write(&packet).map_err(DisplayError::Spi)?;
        self.spi.flush().map_err(DisplayError::Spi)?;

        delay.delay_ns(CLEAR_HOLD_NS);
        self.cs.set_low().map_err(DisplayError::Cs)?;

        Ok(())
    }

    pub fn flush_frame<D>(
        &mut self,
        frame: &FrameBuffer,
        delay: &mut D,
    ) -> SharpDisplayResult<SPI::Error, DISP::Error, EMD::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.flush_rows(frame, 1..=HEIGHT as u16, delay)
    }

    /// Writes the given 1-based rows in a single CS-high transaction.
    pub fn flush_rows<D>(
        &mut self,
        frame: &FrameBuffer,
        rows: RangeInclusive<u16>,
        delay: &mut D,
    ) -> SharpDisplayResult<SPI::Error, DISP::Error, EMD::Error, CS::Error>
    where
        D: DelayNs,
    {
        let (first, last) = (*rows.start(), *rows.end());
        if frame::row_address(first).is_none() {
            return Err(DisplayError::RowOutOfRange(first));
        }
        if frame::row_address(last).is_none() {
            return Err(DisplayError::RowOutOfRange(last));
        }
        if first > last {
            return Ok(());
        }

        self.vcom_high = !self.vcom_high;

        self.cs.set_high().map_err(DisplayError::Cs)?;
        delay.delay_ns(CS_SETUP_NS);

        let command = frame::command_byte(true, self.vcom_high, false);
        self.spi.write(&[command]).map_err(DisplayError::Spi)?;

        // [address][50 data bytes][dummy]
        let mut packet = [0u8; ROW_BYTES + 2];
        for row in first..=last {
            packet[0] = frame::row_address(row).ok_or(DisplayError::RowOutOfRange(row))?;
            let data = frame.row(row).ok_or(DisplayError::RowOutOfRange(row))?;
            packet[1..1 + ROW_BYTES].copy_from_slice(data);

            self.spi.write(&packet).map_err(DisplayError::Spi)?;
        }

        // Transaction trailer.
        self.spi.write(&[0x00]).map_err(DisplayError::Spi)?;
        self.spi.flush().map_err(DisplayError::Spi)?;

        delay.delay_ns(CS_HOLD_NS);
        self.cs.set_low().map_err(DisplayError::Cs)?;

        debug!("display: flushed rows {}..={}", first, last);
        Ok(())
    }

    /// Blanks the panel and drops DISP. Memory contents are not retained.
    pub fn power_down<D>(
        &mut self,
        delay: &mut D,
    ) -> SharpDisplayResult<SPI::Error, DISP::Error, EMD::Error, CS::Error>
    where
        D: DelayNs,
    {
        self.clear_all(delay)?;
        self.disp.set_low().map_err(DisplayError::Disp)
    }
}
