use rand::Rng;

use crate::constants::{FONT_SPRITE_HEIGHT, FONT_START, MAX_STACK_DEPTH, STACK_START};
use crate::error::Chip8Error;
use crate::framebuffer::Screen;
use crate::instruction::Instruction;
use crate::keypad::Input;
use crate::registers::Register;
use crate::state::State;

/// Where execution continues once an instruction is done.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    /// pc += 2
    Next,
    /// pc += 4
    Skip,
    /// pc = addr, no further increment
    Jump(u16),
}

fn skip_if(condition: bool) -> Flow {
    if condition {
        Flow::Skip
    } else {
        Flow::Next
    }
}

/// Address of the stack slot holding the return address pushed at depth `sp`
fn stack_slot(sp: u8) -> u16 {
    STACK_START + 2 * u16::from(sp - 1)
}

/// Runs a single decoded instruction against the machine.
/// Never touches pc itself, the returned `Flow` says how it should move.
pub fn execute(
    instruction: Instruction,
    state: &mut State,
    screen: &mut dyn Screen,
    input: &mut dyn Input,
) -> Result<Flow, Chip8Error> {
    use Instruction::*;

    let flow = match instruction {
        Cls => clr(state, screen),
        Ret => rts(state)?,
        Jp { addr } => Flow::Jump(addr),
        Call { addr } => call(state, addr)?,
        SeByte { x, kk } => skip_if(state.registers.get(x) == kk),
        SneByte { x, kk } => skip_if(state.registers.get(x) != kk),
        SeReg { x, y } => skip_if(state.registers.get(x) == state.registers.get(y)),
        LdByte { x, kk } => load(state, x, kk),
        AddByte { x, kk } => add(state, x, kk),
        LdReg { x, y } => {
            let value = state.registers.get(y);
            load(state, x, value)
        }
        Or { x, y } => logic(state, x, y, |a, b| a | b),
        And { x, y } => logic(state, x, y, |a, b| a & b),
        Xor { x, y } => logic(state, x, y, |a, b| a ^ b),
        AddReg { x, y } => addr(state, x, y),
        Sub { x, y } => sub(state, x, x, y),
        Shr { x } => shr(state, x),
        Subn { x, y } => sub(state, x, y, x),
        Shl { x } => shl(state, x),
        SneReg { x, y } => skip_if(state.registers.get(x) != state.registers.get(y)),
        LdI { addr } => loadi(state, addr),
        JpV0 { addr } => Flow::Jump(addr + u16::from(state.registers.get(Register::V0))),
        Rnd { x, kk } => rnd(state, x, kk),
        Drw { x, y, n } => draw(state, screen, x, y, n),
        Skp { x } => skip_if(input.is_pressed(state.registers.get(x))),
        Sknp { x } => skip_if(!input.is_pressed(state.registers.get(x))),
        LdVxDt { x } => {
            let delay = state.registers.delay_timer;
            load(state, x, delay)
        }
        LdKey { x } => keyd(state, input, x),
        LdDtVx { x } => {
            state.registers.delay_timer = state.registers.get(x);
            Flow::Next
        }
        LdStVx { x } => {
            state.registers.sound_timer = state.registers.get(x);
            Flow::Next
        }
        AddI { x } => addi(state, x),
        LdFont { x } => ldspr(state, x),
        LdBcd { x } => bcd(state, x),
        Store { x } => stor(state, x),
        Load { x } => read(state, x),
    };
    Ok(flow)
}

/// clear
fn clr(state: &mut State, screen: &mut dyn Screen) -> Flow {
    screen.clear();
    state.draw_flag = true;
    Flow::Next
}

/// PC = STACK.pop()
fn rts(state: &mut State) -> Result<Flow, Chip8Error> {
    let sp = state.registers.sp;
    if sp == 0 {
        return Err(Chip8Error::StackUnderflow);
    }
    let return_address = state.memory.read_word(stack_slot(sp));
    state.registers.sp = sp - 1;
    Ok(Flow::Jump(return_address))
}

/// STACK.push(PC + 2); PC = addr
fn call(state: &mut State, addr: u16) -> Result<Flow, Chip8Error> {
    if state.registers.sp == MAX_STACK_DEPTH {
        return Err(Chip8Error::StackOverflow {
            depth: MAX_STACK_DEPTH,
        });
    }
    let sp = state.registers.sp + 1;
    let return_address = state.registers.pc.wrapping_add(2);
    state.memory.write_word(stack_slot(sp), return_address);
    state.registers.sp = sp;
    Ok(Flow::Jump(addr))
}

/// Vx = kk
fn load(state: &mut State, x: Register, kk: u8) -> Flow {
    state.registers.set(x, kk);
    Flow::Next
}

/// Vx += kk
/// Overflow wraps and VF is left alone
fn add(state: &mut State, x: Register, kk: u8) -> Flow {
    let res = state.registers.get(x).wrapping_add(kk);
    state.registers.set(x, res);
    Flow::Next
}

/// Vx = Vx op Vy
fn logic(state: &mut State, x: Register, y: Register, op: fn(u8, u8) -> u8) -> Flow {
    let res = op(state.registers.get(x), state.registers.get(y));
    state.registers.set(x, res);
    Flow::Next
}

/// Vx += Vy; VF = carry
fn addr(state: &mut State, x: Register, y: Register) -> Flow {
    let (res, carry) = state.registers.get(x).overflowing_add(state.registers.get(y));
    state.registers.set(x, res);
    state.registers.set_flag(carry);
    Flow::Next
}

/// VF = borrow; Vx = minuend - subtrahend
/// SUB is Vx - Vy, SUBN is Vy - Vx
fn sub(state: &mut State, x: Register, minuend: Register, subtrahend: Register) -> Flow {
    let (res, borrow) = state
        .registers
        .get(minuend)
        .overflowing_sub(state.registers.get(subtrahend));
    state.registers.set_flag(borrow);
    state.registers.set(x, res);
    Flow::Next
}

/// VF = shifted out bit; Vx /= 2
fn shr(state: &mut State, x: Register) -> Flow {
    let value = state.registers.get(x);
    state.registers.set_flag(value & 0x1 == 0x1);
    state.registers.set(x, value >> 1);
    Flow::Next
}

/// VF = shifted out bit; Vx *= 2
fn shl(state: &mut State, x: Register) -> Flow {
    let value = state.registers.get(x);
    state.registers.set_flag(value & 0x80 == 0x80);
    state.registers.set(x, value << 1);
    Flow::Next
}

/// I = addr
fn loadi(state: &mut State, addr: u16) -> Flow {
    state.registers.i = addr;
    Flow::Next
}

/// Vx = rand_byte & kk
fn rnd(state: &mut State, x: Register, kk: u8) -> Flow {
    let rand_byte: u8 = state.rng.gen();
    state.registers.set(x, rand_byte & kk);
    Flow::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at memory I..I+n onto the screen at (Vx, Vy).
/// VF = whether any pixels were erased
fn draw(state: &mut State, screen: &mut dyn Screen, x: Register, y: Register, n: u8) -> Flow {
    let sprite = state.memory.read_range(state.registers.i, n as usize);
    let origin = (
        state.registers.get(x) as usize,
        state.registers.get(y) as usize,
    );
    let collision = screen.draw_sprite(origin, &sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
    Flow::Next
}

/// await keypress for Vx
/// Only keys pressed from now on count, so any press that's already queued is dropped.
fn keyd(state: &mut State, input: &mut dyn Input, x: Register) -> Flow {
    let _ = input.take_key_press();
    state.register_needing_key = Some(x);
    Flow::Next
}

/// I += Vx
fn addi(state: &mut State, x: Register) -> Flow {
    let i = state.registers.i;
    state.registers.i = i.wrapping_add(u16::from(state.registers.get(x)));
    Flow::Next
}

/// I = address of the font sprite for the low nibble of Vx
/// See constants::SPRITE_SHEET
fn ldspr(state: &mut State, x: Register) -> Flow {
    let digit = u16::from(state.registers.get(x) & 0xF);
    state.registers.i = FONT_START + digit * FONT_SPRITE_HEIGHT;
    Flow::Next
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: Register) -> Flow {
    let value = state.registers.get(x);
    let digits = [value / 100, value / 10 % 10, value % 10];
    state.memory.load(state.registers.i, &digits);
    Flow::Next
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: Register) -> Flow {
    let i = state.registers.i;
    for register in x.range_from_v0() {
        let address = i.wrapping_add(register.index() as u16);
        state.memory.write(address, state.registers.get(register));
    }
    Flow::Next
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: Register) -> Flow {
    let i = state.registers.i;
    for register in x.range_from_v0() {
        let address = i.wrapping_add(register.index() as u16);
        state.registers.set(register, state.memory.read(address));
    }
    Flow::Next
}
