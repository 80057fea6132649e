/*!
# Introductory Tutorial for Minimal-2D

Minimal-2D is brainfuck laid out on a grid. Instead of brackets for
loops, the program steers the instruction pointer around the page with
`U`, `D`, `L` and `R`, and skips a cell with `/` when the current memory
cell holds zero.

Write a program into a file named `input.txt` and run the interpreter from
the same directory. When the program finishes you get a report.

<pre><code>&nbsp;$ echo '+++.' > input.txt
&nbsp;$ minimal | od -c
&nbsp;  003  \n  \n   P   r   o   g   r   a   m ...
</code></pre>

The instruction pointer starts in the upper left corner heading right.
Every cell it passes over is either a command or a comment. Comments are
free and don't count toward the number of instructions processed.

## Memory

There is a heap of bytes, all zero to begin with, and a cursor pointing at
one of them. `>` and `<` move the cursor, `+` and `-` change the byte.
Everything is 8 bits and wraps: `-` on a zero gives 255, and `<` from the
first cell lands on cell 255.

With the stack enabled (it is by default) `V` pushes the current cell,
`!` copies the top of the stack back, and `^` throws it away.

## Loops

A loop is a circuit on the page. This one counts down from three,
printing 2, 1 and 0.

<pre><code>&nbsp;+++>&<-./D
&nbsp;       D>L
&nbsp;       R(
</code></pre>

`&` writes the current position into two heap cells and `(` jumps back to
it. While the counter is not zero the `D` at the end of the first row sends
the pointer down and around to the `(`. When it reaches zero, `/` jumps
over that `D` and the pointer runs off the end of the row, which ends the
program.

## Stopping

A program stops when the pointer walks off the grid in the direction it is
travelling, when it reaches `;`, or when you press CTRL-C.

## Debugging

`#` dumps the heap and `@` dumps the stack to stderr. In a terminal the
interpreter waits for ENTER after each table; CTRL-C or CTRL-D at that
prompt stops the program. Pass `--no-pause` to keep going, or
`--dump-on-exit` to see everything once the program ends.

*/
