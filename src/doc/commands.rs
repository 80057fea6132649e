/*!
# Commands

| Command | Effect |
|---|---|
| `>` | Move the cursor right. |
| `<` | Move the cursor left. |
| `+` | Increment the current cell. |
| `-` | Decrement the current cell. |
| `.` | Write the current cell to stdout as a byte. |
| `,` | Read the next non-blank byte from stdin into the current cell. |
| `/` | Skip the next cell if the current cell is zero. |
| `U` `D` `L` `R` | Travel up, down, left or right. |

## Stack

Disable with `--no-stack`.

| Command | Effect |
|---|---|
| `V` | Push the current cell. |
| `^` | Pop the stack. |
| `!` | Copy the top of the stack into the current cell. |
| `[` | Push the cursor, then move the cursor to the address in the current cell. |
| `]` | Move the cursor to the address on top of the stack and pop it. |

## Extensions

Disable with `--no-extensions`.

| Command | Effect |
|---|---|
| `)` | Set the current cell to zero. |
| `;` | End the program. |
| `~` | Move the cursor to the address in the current cell. |
| `&` | Store the pointer's column in the current cell and its row in the next. |
| `(` | Jump to the column and row stored by `&`. |

## Debugging

Disable with `--no-debug`.

| Command | Effect |
|---|---|
| `#` | Dump the heap. |
| `@` | Dump the stack. |

## Remarks

At end of input `,` leaves the cell unchanged. Popping an empty stack is
allowed and wraps the stack's cursor around.

A pointer travelling up or down only stops once it leaves the first or last
row, so it may pass through short rows; cells missing from a short row are
skipped like comments. A pointer travelling left or right stops at either
end of its row.

*/
